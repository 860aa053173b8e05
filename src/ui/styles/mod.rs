// SPDX-License-Identifier: MIT
//! Centralized styles for every widget of the window and its dialogs.

pub mod button;
pub mod container;
