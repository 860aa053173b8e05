// SPDX-License-Identifier: MIT
//! Global keyboard shortcuts of the main window.

use super::categories::CategoryIndex;
use iced::keyboard::{self, key::Named, Key};

/// What a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Category(CategoryIndex),
    Previous,
    Next,
}

/// Maps a key press to a shortcut. Presses combined with Ctrl, Alt or the
/// logo key are left to the system.
#[must_use]
pub fn shortcut_for(key: &Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) => CategoryIndex::from_digit(digit).map(Shortcut::Category),
                _ => None,
            }
        }
        _ => None,
    }
}
