// SPDX-License-Identifier: MIT
//! Controller callbacks registered on the window.
//!
//! Each gesture has one typed slot. Registering again replaces the previous
//! handler. Handlers receive the window mutably so they can push state back
//! (status, categories, dialogs) while they run.

use super::categories::CategoryIndex;
use super::Window;
use crate::config::CATEGORY_SLOTS;
use std::fmt;

/// Handler for a gesture without payload.
pub type Handler = Box<dyn FnMut(&mut Window)>;

/// Handler for a gesture on a category slot.
pub type CategoryHandler = Box<dyn FnMut(&mut Window, CategoryIndex)>;

/// Gestures without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SelectFolder,
    Next,
    Previous,
    Reset,
    Close,
}

/// Click and right-click handlers of one category slot.
pub struct CategoryBinding {
    pub on_click: CategoryHandler,
    pub on_right_click: CategoryHandler,
}

/// Which of the two category handlers to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGesture {
    Click,
    RightClick,
}

#[derive(Default)]
pub struct Handlers {
    select_folder: Option<Handler>,
    next: Option<Handler>,
    previous: Option<Handler>,
    reset: Option<Handler>,
    close: Option<Handler>,
    categories: [Option<CategoryBinding>; CATEGORY_SLOTS],
}

impl Handlers {
    pub(super) fn slot_mut(&mut self, gesture: Gesture) -> &mut Option<Handler> {
        match gesture {
            Gesture::SelectFolder => &mut self.select_folder,
            Gesture::Next => &mut self.next,
            Gesture::Previous => &mut self.previous,
            Gesture::Reset => &mut self.reset,
            Gesture::Close => &mut self.close,
        }
    }

    pub(super) fn category_mut(&mut self, index: CategoryIndex) -> &mut Option<CategoryBinding> {
        &mut self.categories[index.get()]
    }

    #[must_use]
    pub fn is_registered(&self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::SelectFolder => self.select_folder.is_some(),
            Gesture::Next => self.next.is_some(),
            Gesture::Previous => self.previous.is_some(),
            Gesture::Reset => self.reset.is_some(),
            Gesture::Close => self.close.is_some(),
        }
    }

    #[must_use]
    pub fn is_category_bound(&self, index: CategoryIndex) -> bool {
        self.categories[index.get()].is_some()
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<usize> = CategoryIndex::ALL
            .iter()
            .filter(|index| self.is_category_bound(**index))
            .map(|index| index.number())
            .collect();
        f.debug_struct("Handlers")
            .field("select_folder", &self.select_folder.is_some())
            .field("next", &self.next.is_some())
            .field("previous", &self.previous.is_some())
            .field("reset", &self.reset.is_some())
            .field("close", &self.close.is_some())
            .field("categories", &bound)
            .finish()
    }
}

impl Window {
    /// Runs the handler registered for `gesture`. Returns `false` when none
    /// is registered.
    ///
    /// The handler is moved out of its slot while it runs, so it can borrow
    /// the window mutably. It goes back afterwards unless it registered a
    /// replacement for itself.
    pub(super) fn invoke(&mut self, gesture: Gesture) -> bool {
        let Some(mut handler) = self.handlers.slot_mut(gesture).take() else {
            tracing::debug!(?gesture, "no handler registered");
            return false;
        };
        handler(self);
        let slot = self.handlers.slot_mut(gesture);
        if slot.is_none() {
            *slot = Some(handler);
        }
        true
    }

    pub(super) fn invoke_category(&mut self, index: CategoryIndex, gesture: CategoryGesture) -> bool {
        let Some(mut binding) = self.handlers.category_mut(index).take() else {
            tracing::debug!(slot = index.number(), "category has no binding");
            return false;
        };
        match gesture {
            CategoryGesture::Click => (binding.on_click)(self, index),
            CategoryGesture::RightClick => (binding.on_right_click)(self, index),
        }
        let slot = self.handlers.category_mut(index);
        if slot.is_none() {
            *slot = Some(binding);
        }
        true
    }

    /// Handler for the source folder button.
    pub fn on_select_folder<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Window) + 'static,
    {
        *self.handlers.slot_mut(Gesture::SelectFolder) = Some(Box::new(handler));
    }

    /// Handler for the right arrow button and key.
    pub fn on_next<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Window) + 'static,
    {
        *self.handlers.slot_mut(Gesture::Next) = Some(Box::new(handler));
    }

    /// Handler for the left arrow button and key.
    pub fn on_prev<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Window) + 'static,
    {
        *self.handlers.slot_mut(Gesture::Previous) = Some(Box::new(handler));
    }

    /// Shows the reset button and routes its presses to `handler`.
    pub fn add_reset_button<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Window) + 'static,
    {
        *self.handlers.slot_mut(Gesture::Reset) = Some(Box::new(handler));
    }

    /// Handler run once when the window is about to close.
    pub fn on_close<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Window) + 'static,
    {
        *self.handlers.slot_mut(Gesture::Close) = Some(Box::new(handler));
    }

    /// Binds click and right-click of one category slot. The binding
    /// survives [`Window::set_categories`].
    pub fn bind_category<C, R>(&mut self, index: CategoryIndex, on_click: C, on_right_click: R)
    where
        C: FnMut(&mut Window, CategoryIndex) + 'static,
        R: FnMut(&mut Window, CategoryIndex) + 'static,
    {
        *self.handlers.category_mut(index) = Some(CategoryBinding {
            on_click: Box::new(on_click),
            on_right_click: Box::new(on_right_click),
        });
    }

    #[must_use]
    pub fn has_reset_button(&self) -> bool {
        self.handlers.is_registered(Gesture::Reset)
    }
}
