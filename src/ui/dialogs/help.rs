// SPDX-License-Identifier: MIT
//! How-to dialog describing the sorting workflow.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Numbered workflow steps, in display order.
const STEP_KEYS: [&str; 5] = [
    "help-step-select-folder",
    "help-step-configure",
    "help-step-sort",
    "help-step-navigate",
    "help-step-reset",
];

const TIP_KEYS: [&str; 1] = ["help-tip-formats"];

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let steps = STEP_KEYS
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (n, key)| {
            column.push(Text::new(format!("{}. {}", n + 1, i18n.tr(key))).size(typography::BODY))
        });

    let tips = TIP_KEYS
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, key| {
            column.push(Text::new(format!("• {}", i18n.tr(key))).size(typography::BODY_SM))
        });

    let close = button(Text::new(i18n.tr("dialog-close-button")))
        .on_press(Message::Dismiss)
        .padding([spacing::XXS, spacing::LG])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("help-title")).size(typography::TITLE_MD))
        .push(steps)
        .push(rule::horizontal(1))
        .push(Text::new(i18n.tr("help-tips-title")).size(typography::TITLE_SM))
        .push(tips)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(close)
                .push(Space::new().width(Length::Fill)),
        );

    Container::new(content)
        .width(sizing::INFO_DIALOG_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn every_step_is_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for key in STEP_KEYS.iter().chain(TIP_KEYS.iter()) {
            assert!(!i18n.tr(key).starts_with("MISSING"), "missing {key}");
        }
    }

    #[test]
    fn help_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
