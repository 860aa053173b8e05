// SPDX-License-Identifier: MIT
//! Informational, warning and error dialogs with a single OK button.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    fn title_key(self) -> &'static str {
        match self {
            Severity::Info => "dialog-info-title",
            Severity::Warning => "dialog-warning-title",
            Severity::Error => "dialog-error-title",
        }
    }

    fn accent(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub severity: Severity,
    pub text: String,
}

impl MessageDialog {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

pub fn view<'a>(dialog: &'a MessageDialog, i18n: &I18n) -> Element<'a, Message> {
    let accent = Container::new(Space::new().height(4))
        .width(Length::Fill)
        .style(styles::container::accent(dialog.severity.accent()));

    let ok = button(Text::new(i18n.tr("dialog-ok-button")))
        .on_press(Message::Dismiss)
        .padding([spacing::XXS, spacing::LG])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(accent)
        .push(Text::new(i18n.tr(dialog.severity.title_key())).size(typography::TITLE_MD))
        .push(Text::new(dialog.text.as_str()).size(typography::BODY))
        .push(Row::new().push(Space::new().width(Length::Fill)).push(ok));

    Container::new(content)
        .width(sizing::DIALOG_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}
