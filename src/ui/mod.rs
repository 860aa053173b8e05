// SPDX-License-Identifier: MIT
//! User interface components.
//!
//! The window follows the Elm-style "state down, messages up" pattern: the
//! controller pushes state in, widgets emit messages, and the window turns
//! them into handler calls.
//!
//! - [`window`] - Main window: image, status, folder, category grid
//! - [`dialogs`] - Modal message, category, how-to and about dialogs
//! - [`folder_picker`] - Native folder chooser behind a trait
//! - [`link_opener`] - Opens the project page in the browser
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod dialogs;
pub mod folder_picker;
pub mod link_opener;
pub mod styles;
pub mod theming;
pub mod window;
