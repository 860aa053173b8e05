// SPDX-License-Identifier: MIT
//! Native folder chooser.
//!
//! The window talks to the file system dialog through [`FolderPicker`] so
//! tests can script the answers instead of opening a real dialog.

use std::path::PathBuf;

/// Something that asks the user for a directory.
pub trait FolderPicker {
    /// Blocks until the user chooses a folder or cancels.
    fn pick_folder(&mut self, title: &str) -> Option<PathBuf>;
}

/// Platform dialog backed by `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFolderPicker;

impl FolderPicker for NativeFolderPicker {
    fn pick_folder(&mut self, title: &str) -> Option<PathBuf> {
        let picked = rfd::FileDialog::new().set_title(title).pick_folder();
        match &picked {
            Some(path) => tracing::debug!(path = %path.display(), "folder picked"),
            None => tracing::debug!("folder picker cancelled"),
        }
        picked
    }
}
