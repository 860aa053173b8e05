// SPDX-License-Identifier: MIT
//! Centralized button styles.
//!
//! Every pulsable button has a resting style and a feedback style. The view
//! picks one or the other from the pulse state, so restoring a button after
//! its pulse never needs to remember what it looked like before.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::is_dark_theme;
use crate::ui::window::categories::SlotState;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn disabled_style(theme: &Theme) -> button::Style {
    let background = if is_dark_theme(theme) {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };
    filled(background, palette::GRAY_400, palette::GRAY_400)
}

/// Flash shown while a pulse is pending, regardless of the resting style.
pub fn feedback(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        shadow: shadow::SM,
        ..filled(palette::PRIMARY_200, palette::GRAY_900, palette::PRIMARY_500)
    }
}

/// Primary action: folder selection and dialog confirmation.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, WHITE, palette::PRIMARY_600)
        }
        button::Status::Hovered => button::Style {
            shadow: shadow::SM,
            ..filled(palette::PRIMARY_400, WHITE, palette::PRIMARY_500)
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Neutral button: arrows, cancel, browse, menu entries.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = if is_dark_theme(theme) {
        (palette::GRAY_800, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(background, text_color, palette::GRAY_400)
        }
        button::Status::Hovered => {
            let hover = if is_dark_theme(theme) {
                palette::GRAY_700
            } else {
                palette::GRAY_200
            };
            filled(hover, text_color, palette::PRIMARY_500)
        }
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Destructive actions: reset and category deletion.
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::ERROR_500, WHITE, palette::ERROR_500)
        }
        button::Status::Hovered => button::Style {
            shadow: shadow::SM,
            ..filled(
                Color {
                    a: 0.85,
                    ..palette::ERROR_500
                },
                WHITE,
                palette::ERROR_500,
            )
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Resting style of a category button, from its slot state.
pub fn category(state: SlotState) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match state {
        SlotState::Defined => match status {
            button::Status::Hovered => filled(palette::PRIMARY_500, WHITE, palette::PRIMARY_400),
            button::Status::Disabled => disabled_style(theme),
            _ => filled(palette::PRIMARY_800, WHITE, palette::PRIMARY_600),
        },
        SlotState::Unconfigured => secondary(theme, status),
    }
}

/// Chooses between the feedback flash and a resting style.
pub fn pulsed_or<F>(pulsed: bool, resting: F) -> impl Fn(&Theme, button::Status) -> button::Style
where
    F: Fn(&Theme, button::Status) -> button::Style,
{
    move |theme: &Theme, status: button::Status| {
        if pulsed {
            feedback(theme, status)
        } else {
            resting(theme, status)
        }
    }
}
