// SPDX-License-Identifier: MIT
//! Opens web links in the user's browser.

use std::io;

/// Something that hands a URL to the desktop.
pub trait LinkOpener {
    fn open_link(&mut self, url: &str) -> io::Result<()>;
}

/// Default browser through the `open` crate. Returns once the browser
/// process is spawned.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open_link(&mut self, url: &str) -> io::Result<()> {
        tracing::debug!(url, "opening link");
        open::that_detached(url)
    }
}
