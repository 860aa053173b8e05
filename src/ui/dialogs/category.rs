// SPDX-License-Identifier: MIT
//! Dialog editing one category slot.
//!
//! The dialog ends with exactly one of Save, Cancel or Delete, and the
//! controller callback receives that outcome once. Save only becomes
//! available when both the name and the folder contain something besides
//! whitespace.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::window::categories::{Category, CategoryIndex};
use crate::ui::window::Window;
use iced::alignment::Vertical;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{Element, Length};
use std::fmt;

/// Callback receiving the outcome of the dialog.
pub type OutcomeCallback = Box<dyn FnOnce(&mut Window, CategoryOutcome)>;

/// How the user closed the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    Save {
        index: CategoryIndex,
        name: String,
        path: String,
    },
    Cancel {
        index: CategoryIndex,
    },
    Delete {
        index: CategoryIndex,
    },
}

impl CategoryOutcome {
    #[must_use]
    pub fn index(&self) -> CategoryIndex {
        match self {
            CategoryOutcome::Save { index, .. }
            | CategoryOutcome::Cancel { index }
            | CategoryOutcome::Delete { index } => *index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NameChanged(String),
    PathChanged(String),
    Browse,
    Save,
    Cancel,
    Delete,
}

/// What the window has to do after a dialog message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Browse,
    Finished(CategoryOutcome),
}

pub struct CategoryDialog {
    index: CategoryIndex,
    name: String,
    path: String,
    callback: OutcomeCallback,
}

impl fmt::Debug for CategoryDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryDialog")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl CategoryDialog {
    pub fn new(index: CategoryIndex, initial: &Category, callback: OutcomeCallback) -> Self {
        Self {
            index,
            name: initial.name.clone(),
            path: initial.path.clone(),
            callback,
        }
    }

    #[must_use]
    pub fn index(&self) -> CategoryIndex {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Save requires a non-blank name and a non-blank folder.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty() && !self.path.trim().is_empty()
    }

    pub(crate) fn into_callback(self) -> OutcomeCallback {
        self.callback
    }
}

pub fn update(dialog: &mut CategoryDialog, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => {
            dialog.name = name;
            Event::None
        }
        Message::PathChanged(path) => {
            dialog.path = path;
            Event::None
        }
        Message::Browse => Event::Browse,
        Message::Save => {
            if !dialog.can_save() {
                tracing::debug!(slot = dialog.index.number(), "save ignored, fields incomplete");
                return Event::None;
            }
            Event::Finished(CategoryOutcome::Save {
                index: dialog.index,
                name: dialog.name.trim().to_string(),
                path: dialog.path.trim().to_string(),
            })
        }
        Message::Cancel => Event::Finished(CategoryOutcome::Cancel {
            index: dialog.index,
        }),
        Message::Delete => Event::Finished(CategoryOutcome::Delete {
            index: dialog.index,
        }),
    }
}

pub fn view<'a>(dialog: &'a CategoryDialog, i18n: &I18n) -> Element<'a, Message> {
    let number = dialog.index.number().to_string();
    let title = Text::new(i18n.tr_with_args("dialog-category-title", &[("number", number.as_str())]))
        .size(typography::TITLE_MD);

    let name_input = text_input(&i18n.tr("dialog-category-name-placeholder"), &dialog.name)
        .on_input(Message::NameChanged)
        .padding(spacing::XS);

    let path_input = text_input(&i18n.tr("dialog-category-folder-placeholder"), &dialog.path)
        .on_input(Message::PathChanged)
        .padding(spacing::XS);

    let browse = button(Text::new(i18n.tr("dialog-category-browse")))
        .on_press(Message::Browse)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::secondary);

    let save = button(Text::new(i18n.tr("dialog-category-save")))
        .on_press_maybe(dialog.can_save().then_some(Message::Save))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary);

    let cancel = button(Text::new(i18n.tr("dialog-category-cancel")))
        .on_press(Message::Cancel)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::secondary);

    let delete = button(Text::new(i18n.tr("dialog-category-delete")))
        .on_press(Message::Delete)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::danger);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(Text::new(i18n.tr("dialog-category-name-label")).size(typography::BODY_SM))
        .push(name_input)
        .push(Text::new(i18n.tr("dialog-category-folder-label")).size(typography::BODY_SM))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(path_input)
                .push(browse),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(save)
                .push(cancel)
                .push(Space::new().width(Length::Fill))
                .push(delete),
        );

    Container::new(content)
        .width(sizing::DIALOG_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog(initial: Category) -> CategoryDialog {
        CategoryDialog::new(CategoryIndex::ALL[2], &initial, Box::new(|_, _| {}))
    }

    #[test]
    fn starts_with_initial_values() {
        let dialog = dialog(Category::new("Pets", "/pets"));
        assert_eq!(dialog.name(), "Pets");
        assert_eq!(dialog.path(), "/pets");
        assert!(dialog.can_save());
    }

    #[test]
    fn save_requires_both_fields() {
        let mut dialog = dialog(Category::default());
        assert!(!dialog.can_save());

        update(&mut dialog, Message::NameChanged("A".into()));
        assert!(!dialog.can_save());

        update(&mut dialog, Message::PathChanged("/x".into()));
        assert!(dialog.can_save());

        update(&mut dialog, Message::NameChanged("   ".into()));
        assert!(!dialog.can_save());
    }

    #[test]
    fn save_is_ignored_while_incomplete() {
        let mut dialog = dialog(Category::new("A", ""));
        assert_eq!(update(&mut dialog, Message::Save), Event::None);
    }

    #[test]
    fn save_reports_trimmed_values() {
        let mut dialog = dialog(Category::new("  Pets ", " /pets "));
        assert_eq!(
            update(&mut dialog, Message::Save),
            Event::Finished(CategoryOutcome::Save {
                index: CategoryIndex::ALL[2],
                name: "Pets".into(),
                path: "/pets".into(),
            })
        );
    }

    #[test]
    fn cancel_and_delete_are_always_available() {
        let mut dialog = dialog(Category::default());
        assert_eq!(
            update(&mut dialog, Message::Cancel),
            Event::Finished(CategoryOutcome::Cancel {
                index: CategoryIndex::ALL[2]
            })
        );
        assert_eq!(
            update(&mut dialog, Message::Delete),
            Event::Finished(CategoryOutcome::Delete {
                index: CategoryIndex::ALL[2]
            })
        );
    }

    #[test]
    fn browse_is_delegated() {
        let mut dialog = dialog(Category::default());
        assert_eq!(update(&mut dialog, Message::Browse), Event::Browse);
    }

    #[test]
    fn outcome_knows_its_slot() {
        let outcome = CategoryOutcome::Delete {
            index: CategoryIndex::ALL[7],
        };
        assert_eq!(outcome.index().number(), 8);
    }
}
