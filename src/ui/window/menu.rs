// SPDX-License-Identifier: MIT
//! Hamburger menu giving access to the how-to and about dialogs.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

/// Messages emitted by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenHowTo,
    OpenAbout,
}

/// Events propagated to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    OpenHowTo,
    OpenAbout,
}

/// Process a menu message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenHowTo => {
            *menu_open = false;
            Event::OpenHowTo
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
    }
}

/// The menu toggle button.
pub fn toggle_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(Text::new(i18n.tr("menu-button")))
        .on_press(Message::ToggleMenu)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary)
        .into()
}

/// The dropdown listing the menu entries.
pub fn dropdown<'a>(i18n: &I18n) -> Element<'a, Message> {
    let entries = Column::new()
        .spacing(spacing::XXS)
        .push(menu_item(i18n.tr("menu-how-to"), Message::OpenHowTo))
        .push(menu_item(i18n.tr("menu-about"), Message::OpenAbout));

    Container::new(entries)
        .width(sizing::MENU_WIDTH)
        .padding(spacing::XS)
        .style(styles::container::panel)
        .into()
}

fn menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::secondary)
        .into()
}
