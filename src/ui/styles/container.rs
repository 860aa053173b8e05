// SPDX-License-Identifier: MIT
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::is_dark_theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dialog card and menu dropdown surface.
///
/// Derived from the active theme background with a slight transparency so it
/// reads as raised above the dimmed window.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Frame of the fixed image display area.
pub fn image_frame(theme: &Theme) -> container::Style {
    let background = if is_dark_theme(theme) {
        palette::GRAY_900
    } else {
        palette::GRAY_100
    };
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Tooltip bubble, inverted against the theme for contrast.
pub fn tooltip(theme: &Theme) -> container::Style {
    let (background, text_color) = if is_dark_theme(theme) {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::WHITE)
    };
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Accent strip above a message dialog, colored by severity.
pub fn accent(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
