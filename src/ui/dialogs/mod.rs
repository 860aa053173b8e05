// SPDX-License-Identifier: MIT
//! Modal dialogs shown on top of the main window.
//!
//! At most one dialog is visible at a time. While it is up the window's
//! modal flag is set and the main surface ignores clicks and shortcuts.
//! Message dialogs requested while another dialog is visible wait in a queue
//! and appear once the current one closes. Every entry point takes the
//! window explicitly.

pub mod about;
pub mod category;
pub mod help;
pub mod message;

pub use category::{CategoryDialog, CategoryOutcome};
pub use message::{MessageDialog, Severity};

use crate::i18n::fluent::I18n;
use crate::ui::window::categories::{Category, CategoryIndex};
use crate::ui::window::Window;
use iced::Element;

/// The dialog currently on screen.
#[derive(Debug)]
pub enum Dialog {
    Message(MessageDialog),
    Category(CategoryDialog),
    HowTo,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// OK / Close on message, how-to and about dialogs.
    Dismiss,
    /// "Open GitHub" in the about dialog. The dialog stays open.
    OpenRepository,
    Category(category::Message),
}

/// Shows an informational message.
pub fn show_info(window: &mut Window, text: impl Into<String>) {
    show_message(window, MessageDialog::new(Severity::Info, text));
}

/// Shows a warning.
pub fn show_warning(window: &mut Window, text: impl Into<String>) {
    show_message(window, MessageDialog::new(Severity::Warning, text));
}

/// Shows an error.
pub fn show_error(window: &mut Window, text: impl Into<String>) {
    show_message(window, MessageDialog::new(Severity::Error, text));
}

fn show_message(window: &mut Window, dialog: MessageDialog) {
    match dialog.severity {
        Severity::Error => tracing::error!(text = %dialog.text, "error dialog"),
        Severity::Warning => tracing::warn!(text = %dialog.text, "warning dialog"),
        Severity::Info => tracing::info!(text = %dialog.text, "info dialog"),
    }
    if window.has_dialog() {
        window.queue_message(dialog);
    } else {
        window.open_dialog(Dialog::Message(dialog));
    }
}

/// Opens the editor for slot `index`, prefilled with `initial`.
///
/// `callback` runs exactly once with the outcome. When another dialog is
/// already open the editor cannot appear and the callback immediately
/// receives [`CategoryOutcome::Cancel`].
pub fn configure_category<F>(window: &mut Window, index: CategoryIndex, initial: Category, callback: F)
where
    F: FnOnce(&mut Window, CategoryOutcome) + 'static,
{
    if window.has_dialog() {
        tracing::debug!(slot = index.number(), "category dialog refused, another dialog is open");
        callback(window, CategoryOutcome::Cancel { index });
        return;
    }
    let dialog = CategoryDialog::new(index, &initial, Box::new(callback));
    window.open_dialog(Dialog::Category(dialog));
}

/// Opens the how-to dialog unless another dialog is showing.
pub fn show_how_to(window: &mut Window) {
    if !window.has_dialog() {
        window.open_dialog(Dialog::HowTo);
    }
}

/// Opens the about dialog unless another dialog is showing.
pub fn show_about(window: &mut Window) {
    if !window.has_dialog() {
        window.open_dialog(Dialog::About);
    }
}

/// Applies a dialog message to the open dialog.
pub(crate) fn update(window: &mut Window, message: Message) {
    match message {
        Message::Dismiss => match window.dialog() {
            Some(Dialog::Category(_)) => finish_category(window, None),
            Some(_) => {
                window.close_dialog();
                window.show_next_queued();
            }
            None => tracing::debug!("dismiss without open dialog"),
        },
        Message::OpenRepository => {
            if let Err(err) = window.open_link(about::REPOSITORY_URL) {
                tracing::warn!(error = %err, "could not open repository link");
                let text = window.i18n().tr_with_args(
                    "about-open-repository-failed",
                    &[("url", about::REPOSITORY_URL)],
                );
                show_error(window, text);
            }
        }
        Message::Category(message) => {
            let Some(Dialog::Category(dialog)) = window.dialog_mut() else {
                tracing::debug!(?message, "category message without category dialog");
                return;
            };
            match category::update(dialog, message) {
                category::Event::None => {}
                category::Event::Browse => browse(window),
                category::Event::Finished(outcome) => finish_category(window, Some(outcome)),
            }
        }
    }
}

fn browse(window: &mut Window) {
    let title = window.i18n().tr("browse-dialog-title");
    let Some(path) = window.pick_folder(&title) else {
        return;
    };
    if let Some(Dialog::Category(dialog)) = window.dialog_mut() {
        dialog.set_path(path.display().to_string());
    }
}

/// Cancels the open category dialog, running its callback.
pub(crate) fn cancel_category(window: &mut Window) {
    finish_category(window, None);
}

/// Closes the category dialog, clears the modal flag, then hands the
/// outcome to the controller. A dismiss without outcome counts as cancel.
fn finish_category(window: &mut Window, outcome: Option<CategoryOutcome>) {
    let Some(Dialog::Category(dialog)) = window.close_dialog() else {
        return;
    };
    let outcome = outcome.unwrap_or(CategoryOutcome::Cancel {
        index: dialog.index(),
    });
    tracing::debug!(?outcome, "category dialog closed");
    let callback = dialog.into_callback();
    callback(window, outcome);
    window.show_next_queued();
}

/// Renders `dialog`.
pub fn view<'a>(dialog: &'a Dialog, i18n: &I18n) -> Element<'a, Message> {
    match dialog {
        Dialog::Message(dialog) => message::view(dialog, i18n),
        Dialog::Category(dialog) => category::view(dialog, i18n).map(Message::Category),
        Dialog::HowTo => help::view(i18n),
        Dialog::About => about::view(i18n),
    }
}
