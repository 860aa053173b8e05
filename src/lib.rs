// SPDX-License-Identifier: MIT
//! `photo_sorter` is the view layer of a desktop photo sorter built with the
//! Iced GUI framework.
//!
//! The [`ui::window::Window`] shows one photo at a time with nine category
//! buttons underneath. A controller registers handlers on the window and
//! decides what each gesture means; the window itself only renders state and
//! reports gestures. [`preview`] contains a small in-memory controller used
//! by the bundled binary.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod preview;
pub mod ui;
