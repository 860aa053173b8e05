// SPDX-License-Identifier: MIT
//! About dialog showing version, project link and license.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project home page.
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let link = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("about-repository-label")).size(typography::BODY))
        .push(
            Text::new(REPOSITORY_URL)
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        );

    let open_repository = button(Text::new(i18n.tr("about-open-repository")))
        .on_press(Message::OpenRepository)
        .padding([spacing::XXS, spacing::LG])
        .style(styles::button::secondary);

    let close = button(Text::new(i18n.tr("dialog-close-button")))
        .on_press(Message::Dismiss)
        .padding([spacing::XXS, spacing::LG])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("about-app-name")).size(typography::TITLE_MD))
        .push(Text::new(format!("v{APP_VERSION}")).size(typography::BODY_SM))
        .push(Text::new(i18n.tr("about-app-description")).size(typography::BODY))
        .push(link)
        .push(Text::new(i18n.tr("about-license")).size(typography::CAPTION))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Space::new().width(Length::Fill))
                .push(open_repository)
                .push(close),
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

    #[test]
    fn app_version_is_valid() {
        assert!(!APP_VERSION.is_empty());
        assert!(APP_VERSION.split('.').count() >= 2);
    }

    #[test]
    fn repository_points_to_project() {
        assert!(REPOSITORY_URL.ends_with("/photo_sorter"));
    }

    #[test]
    fn license_text_matches_package_license() {
        let license = env!("CARGO_PKG_LICENSE");
        for lang in ["en-US", "fr"] {
            let i18n = I18n::new(Some(lang.to_string()), &crate::config::Config::default());
            assert!(i18n.tr("about-license").contains(license), "{lang}");
        }
    }

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
