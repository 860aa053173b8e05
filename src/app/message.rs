// SPDX-License-Identifier: MIT
//! Top-level messages and launch flags.

use crate::ui::window;

/// Messages handled by the application shell.
#[derive(Debug, Clone)]
pub enum Message {
    Window(window::Message),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 format (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
