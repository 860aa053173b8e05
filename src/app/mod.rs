// SPDX-License-Identifier: MIT
//! Application shell wiring the window into the iced runtime.
//!
//! The shell loads settings, builds the [`Window`], lets the caller install
//! its controller handlers, and then forwards runtime events to the window.
//! When the window asks to exit the shell closes the event loop.

pub mod message;
pub mod paths;
pub mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::dialogs;
use crate::ui::theming::ThemeMode;
use crate::ui::window::{self as main_window, Effect, Window};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root state handed to iced.
pub struct App {
    window: Window,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window", &self.window)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
///
/// `install` receives the freshly built window and registers the
/// controller's handlers on it before the first frame.
pub fn run<F>(flags: Flags, install: F) -> iced::Result
where
    F: FnOnce(&mut Window) + 'static,
{
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced requires Fn for boot while the setup runs only once
    let boot_state = RefCell::new(Some((flags, config, config_warning, install)));
    let boot = move || {
        let (flags, config, warning, install) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, config, warning, install)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new<F>(flags: Flags, config: Config, warning: Option<String>, install: F) -> (Self, Task<Message>)
    where
        F: FnOnce(&mut Window),
    {
        let i18n = I18n::new(flags.lang, &config);
        tracing::info!(locale = %i18n.current_locale(), "starting photo sorter");

        let mut window = Window::new(i18n, config.feedback.pulse_duration());
        install(&mut window);

        if let Some(key) = warning {
            let text = window.i18n().tr(&key);
            dialogs::show_warning(&mut window, text);
        }

        let app = App {
            window,
            theme_mode: config.general.theme_mode,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.window.i18n().tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.window.has_pending_feedback()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Window(message) => match self.window.update(message) {
                Effect::None => Task::none(),
                Effect::Exit => {
                    tracing::info!("exiting");
                    iced::exit()
                }
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.window.view().map(Message::Window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::window::categories::CategoryIndex;
    use std::cell::Cell;
    use std::rc::Rc;

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    #[test]
    fn title_is_translated() {
        let (app, _task) = App::new(english(), Config::default(), None, |_| {});
        assert_eq!(app.title(), "Photo Sorter");
    }

    #[test]
    fn install_registers_handlers_before_first_update() {
        let clicks = Rc::new(Cell::new(0));
        let seen = clicks.clone();
        let (mut app, _task) = App::new(english(), Config::default(), None, move |window| {
            window.bind_category(
                CategoryIndex::ALL[0],
                move |_, _| clicks.set(clicks.get() + 1),
                |_, _| {},
            );
        });

        let _ = app.update(Message::Window(main_window::Message::CategoryPressed(
            CategoryIndex::ALL[0],
        )));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn config_warning_opens_a_dialog() {
        let (app, _task) = App::new(
            english(),
            Config::default(),
            Some("warning-config-load-error".to_string()),
            |_| {},
        );
        assert!(app.window.has_dialog());
        assert!(app.window.is_modal_open());
    }

    #[test]
    fn window_settings_intercept_close() {
        let settings = window_settings(&Config::default());
        assert!(!settings.exit_on_close_request);
        assert_eq!(
            settings.min_size,
            Some(iced::Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32))
        );
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let (app, _task) = App::new(english(), config, None, |_| {});
        assert_eq!(app.theme(), Theme::Light);
    }
}
