// SPDX-License-Identifier: MIT
//! Category slots and the button grid they are rendered into.
//!
//! The window always shows exactly nine slots. Slot `n` sits at grid
//! position `n` and answers to digit key `n + 1`. The controller owns the
//! category list; the grid only holds the last snapshot pushed into it.

use crate::config::{CATEGORY_SLOTS, GRID_SINGLE_COLUMN_BELOW, GRID_SINGLE_ROW_FROM};
use crate::i18n::fluent::I18n;
use std::fmt;

/// Index of a category slot, guaranteed to be in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryIndex(u8);

impl CategoryIndex {
    /// Every slot, in grid order.
    pub const ALL: [CategoryIndex; CATEGORY_SLOTS] = [
        CategoryIndex(0),
        CategoryIndex(1),
        CategoryIndex(2),
        CategoryIndex(3),
        CategoryIndex(4),
        CategoryIndex(5),
        CategoryIndex(6),
        CategoryIndex(7),
        CategoryIndex(8),
    ];

    /// Returns `None` for indices outside `0..9`.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < CATEGORY_SLOTS).then(|| Self(index as u8))
    }

    /// Maps the digit keys `1`-`9` to slots 0-8.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let value = digit.to_digit(10)?;
        (value >= 1).then(|| value as usize - 1).and_then(Self::new)
    }

    /// Zero-based slot index.
    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// One-based number shown on the button and bound to the digit key.
    #[must_use]
    pub fn number(self) -> usize {
        self.get() + 1
    }
}

impl fmt::Display for CategoryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A named destination folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub path: String,
}

impl Category {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// A slot is defined once both its name and its folder are set.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.name.trim().is_empty() && !self.path.trim().is_empty()
    }
}

/// Resting appearance of a category button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unconfigured,
    Defined,
}

/// Snapshot of all nine slots as last pushed by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGrid {
    slots: [Category; CATEGORY_SLOTS],
}

impl CategoryGrid {
    /// Builds a grid from a controller snapshot. Missing entries are left
    /// unconfigured and entries past the ninth are dropped.
    #[must_use]
    pub fn from_snapshot(categories: &[Category]) -> Self {
        let mut grid = Self::default();
        for (slot, category) in grid.slots.iter_mut().zip(categories) {
            slot.clone_from(category);
        }
        if categories.len() > CATEGORY_SLOTS {
            tracing::warn!(
                received = categories.len(),
                "ignoring categories beyond the ninth slot"
            );
        }
        grid
    }

    #[must_use]
    pub fn slot(&self, index: CategoryIndex) -> &Category {
        &self.slots[index.get()]
    }

    #[must_use]
    pub fn state(&self, index: CategoryIndex) -> SlotState {
        if self.slot(index).is_defined() {
            SlotState::Defined
        } else {
            SlotState::Unconfigured
        }
    }

    /// Owned copy of every slot, in index order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Category> {
        self.slots.to_vec()
    }

    /// Button caption: `"3: Holidays"`, or the empty marker for slots
    /// without a name.
    #[must_use]
    pub fn label(&self, index: CategoryIndex, i18n: &I18n) -> String {
        let name = self.slot(index).name.trim();
        if name.is_empty() {
            format!("{}: {}", index.number(), i18n.tr("category-empty"))
        } else {
            format!("{}: {}", index.number(), name)
        }
    }
}

/// Number of grid columns for a given window width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < GRID_SINGLE_COLUMN_BELOW {
        1
    } else if width < GRID_SINGLE_ROW_FROM {
        3
    } else {
        CATEGORY_SLOTS
    }
}

/// Slots grouped into rows of `columns` buttons each.
pub fn rows(columns: usize) -> impl Iterator<Item = &'static [CategoryIndex]> {
    CategoryIndex::ALL.chunks(columns.clamp(1, CATEGORY_SLOTS))
}
