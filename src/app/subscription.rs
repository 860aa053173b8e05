// SPDX-License-Identifier: MIT
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts only reach the window when no widget (a text input in
//! a dialog, for instance) captured the key first.

use super::Message;
use crate::config::PULSE_TICK_MS;
use crate::ui::window;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes native keyboard and window events to the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::Window(window::Message::CloseRequested))
        }
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::Window(window::Message::Resized(size)))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => {
                    Some(Message::Window(window::Message::KeyPressed { key, modifiers }))
                }
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Drives feedback restores. Only active while a pulse is pending.
pub fn create_tick_subscription(pulse_pending: bool) -> Subscription<Message> {
    if pulse_pending {
        time::every(Duration::from_millis(PULSE_TICK_MS))
            .map(window::Message::Tick)
            .map(Message::Window)
    } else {
        Subscription::none()
    }
}
