// SPDX-License-Identifier: MIT
//! The main photo sorting window.
//!
//! The window is a passive view. It renders what the controller pushes into
//! it (image, status line, folder path, category snapshot) and reports user
//! gestures through the handlers registered in [`handlers`]. It never moves
//! files, scans folders or persists anything itself.
//!
//! While a dialog is open the modal flag is set and every gesture on the
//! main surface, keyboard shortcuts included, is ignored.

pub mod categories;
pub mod display;
pub mod feedback;
pub mod handlers;
pub mod keyboard;
pub mod menu;
pub mod status;
mod view;

use crate::config::{FeedbackConfig, DEFAULT_WINDOW_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::dialogs::{self, Dialog, MessageDialog};
use crate::ui::folder_picker::{FolderPicker, NativeFolderPicker};
use crate::ui::link_opener::{LinkOpener, SystemLinkOpener};
use categories::{columns_for_width, Category, CategoryGrid, CategoryIndex, SlotState};
use display::{DisplayImage, FittedImage};
use feedback::{FeedbackPulses, FeedbackTarget, PulseState};
use handlers::{CategoryGesture, Gesture, Handlers};
use iced::Size;
use image_rs::DynamicImage;
use keyboard::Shortcut;
use std::collections::VecDeque;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    SelectFolderPressed,
    ResetPressed,
    PreviousPressed,
    NextPressed,
    CategoryPressed(CategoryIndex),
    CategoryRightPressed(CategoryIndex),
    KeyPressed {
        key: iced::keyboard::Key,
        modifiers: iced::keyboard::Modifiers,
    },
    Resized(Size),
    Menu(menu::Message),
    Dialog(dialogs::Message),
    Tick(Instant),
    CloseRequested,
}

/// What the application shell has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Exit,
}

pub struct Window {
    i18n: I18n,
    handlers: Handlers,
    grid: CategoryGrid,
    display: DisplayImage,
    status: String,
    folder_path: Option<PathBuf>,
    folder_selected: bool,
    select_folder_enabled: bool,
    modal_open: bool,
    dialog: Option<Dialog>,
    queued_messages: VecDeque<MessageDialog>,
    picker: Box<dyn FolderPicker>,
    picker_open: bool,
    links: Box<dyn LinkOpener>,
    pulses: FeedbackPulses,
    columns: usize,
    menu_open: bool,
    exit_requested: bool,
    destroyed: bool,
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("handlers", &self.handlers)
            .field("status", &self.status)
            .field("folder_path", &self.folder_path)
            .field("modal_open", &self.modal_open)
            .field("dialog", &self.dialog)
            .field("queued_messages", &self.queued_messages.len())
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(I18n::default(), FeedbackConfig::default().pulse_duration())
    }
}

impl Window {
    /// Creates the window with an empty grid, a placeholder image and no
    /// handlers. Folder browsing uses the native dialog.
    pub fn new(i18n: I18n, pulse: Duration) -> Self {
        let status = i18n.tr("status-select-folder");
        Self {
            i18n,
            handlers: Handlers::default(),
            grid: CategoryGrid::default(),
            display: DisplayImage::Placeholder,
            status,
            folder_path: None,
            folder_selected: false,
            select_folder_enabled: true,
            modal_open: false,
            dialog: None,
            queued_messages: VecDeque::new(),
            picker: Box::new(NativeFolderPicker),
            picker_open: false,
            links: Box::new(SystemLinkOpener),
            pulses: FeedbackPulses::new(pulse),
            columns: columns_for_width(DEFAULT_WINDOW_WIDTH as f32),
            menu_open: false,
            exit_requested: false,
            destroyed: false,
        }
    }

    /// Replaces the folder chooser used by [`Window::ask_for_folder`] and the
    /// category dialog's Browse button.
    #[must_use]
    pub fn with_folder_picker(mut self, picker: impl FolderPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Replaces how external links are opened.
    #[must_use]
    pub fn with_link_opener(mut self, opener: impl LinkOpener + 'static) -> Self {
        self.links = Box::new(opener);
        self
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::SelectFolderPressed => self.select_folder(),
            Message::ResetPressed => self.activate(FeedbackTarget::Reset, Gesture::Reset),
            Message::PreviousPressed => self.activate(FeedbackTarget::Previous, Gesture::Previous),
            Message::NextPressed => self.activate(FeedbackTarget::Next, Gesture::Next),
            Message::CategoryPressed(index) => self.activate_category(index),
            Message::CategoryRightPressed(index) => {
                if self.blocks_input() {
                    tracing::debug!(slot = index.number(), "right click ignored while modal");
                } else {
                    self.invoke_category(index, CategoryGesture::RightClick);
                }
            }
            Message::KeyPressed { key, modifiers } => self.handle_key(&key, modifiers),
            Message::Resized(size) => self.columns = columns_for_width(size.width),
            Message::Menu(message) => self.handle_menu(message),
            Message::Dialog(message) => dialogs::update(self, message),
            Message::Tick(now) => {
                for target in self.pulses.tick(now) {
                    tracing::trace!(?target, "feedback restored");
                }
            }
            Message::CloseRequested => self.destroy(),
        }

        if self.exit_requested {
            Effect::Exit
        } else {
            Effect::None
        }
    }

    fn blocks_input(&self) -> bool {
        self.modal_open || self.dialog.is_some()
    }

    fn activate(&mut self, target: FeedbackTarget, gesture: Gesture) {
        if self.blocks_input() {
            tracing::debug!(?gesture, "gesture ignored while modal");
            return;
        }
        self.pulses.trigger(target, Instant::now());
        self.invoke(gesture);
    }

    fn activate_category(&mut self, index: CategoryIndex) {
        if self.blocks_input() {
            tracing::debug!(slot = index.number(), "category ignored while modal");
            return;
        }
        self.pulses
            .trigger(FeedbackTarget::Category(index), Instant::now());
        self.invoke_category(index, CategoryGesture::Click);
    }

    /// Runs the select-folder handler with the button disabled, so presses
    /// arriving while it runs are dropped.
    fn select_folder(&mut self) {
        if self.blocks_input() {
            tracing::debug!("select folder ignored while modal");
            return;
        }
        if !self.select_folder_enabled {
            tracing::debug!("select folder already in progress");
            return;
        }
        self.pulses
            .trigger(FeedbackTarget::SelectFolder, Instant::now());
        self.set_select_folder_button_enabled(false);
        self.invoke(Gesture::SelectFolder);
        self.set_select_folder_button_enabled(true);
    }

    fn handle_key(&mut self, key: &iced::keyboard::Key, modifiers: iced::keyboard::Modifiers) {
        if self.blocks_input() {
            return;
        }
        match keyboard::shortcut_for(key, modifiers) {
            Some(Shortcut::Category(index)) => self.activate_category(index),
            Some(Shortcut::Previous) => self.activate(FeedbackTarget::Previous, Gesture::Previous),
            Some(Shortcut::Next) => self.activate(FeedbackTarget::Next, Gesture::Next),
            None => {}
        }
    }

    fn handle_menu(&mut self, message: menu::Message) {
        if self.blocks_input() {
            self.menu_open = false;
            return;
        }
        match menu::update(message, &mut self.menu_open) {
            menu::Event::None => {}
            menu::Event::OpenHowTo => dialogs::show_how_to(self),
            menu::Event::OpenAbout => dialogs::show_about(self),
        }
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Shows `image` fitted into the display area, or the placeholder.
    pub fn show_image(&mut self, image: Option<&DynamicImage>) {
        self.display = match image {
            Some(image) => DisplayImage::Image(FittedImage::from_image(image)),
            None => DisplayImage::Placeholder,
        };
    }

    #[must_use]
    pub fn display(&self) -> &DisplayImage {
        &self.display
    }

    /// Replaces the status line. See [`status::format_status`] for how the
    /// file size is placed.
    pub fn update_status(&mut self, text: impl AsRef<str>, size_kb: Option<f64>) {
        self.status = status::format_status(text.as_ref(), size_kb);
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Rebuilds all nine category buttons from the controller's snapshot.
    /// Handlers bound with [`Window::bind_category`] are kept.
    pub fn set_categories(&mut self, categories: &[Category]) {
        self.grid = CategoryGrid::from_snapshot(categories);
        tracing::debug!(
            defined = CategoryIndex::ALL
                .iter()
                .filter(|index| self.grid.state(**index) == SlotState::Defined)
                .count(),
            "category grid rebuilt"
        );
    }

    /// Copy of the current snapshot, always nine entries long.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.grid.snapshot()
    }

    #[must_use]
    pub fn category(&self, index: CategoryIndex) -> &Category {
        self.grid.slot(index)
    }

    #[must_use]
    pub fn slot_state(&self, index: CategoryIndex) -> SlotState {
        self.grid.state(index)
    }

    #[must_use]
    pub fn category_label(&self, index: CategoryIndex) -> String {
        self.grid.label(index, &self.i18n)
    }

    /// Current number of grid columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    // =========================================================================
    // Source folder
    // =========================================================================

    /// Shows `path` next to the folder button. An empty path means no folder.
    pub fn set_selected_folder_path(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            self.folder_path = None;
            self.update_select_folder_button(false);
        } else {
            self.folder_path = Some(path.components().collect());
            self.update_select_folder_button(true);
        }
    }

    #[must_use]
    pub fn selected_folder(&self) -> Option<&Path> {
        self.folder_path.as_deref()
    }

    /// Text shown next to the folder button.
    #[must_use]
    pub fn folder_path_text(&self) -> String {
        match &self.folder_path {
            Some(path) => path.display().to_string(),
            None => self.i18n.tr("folder-none"),
        }
    }

    /// Switches the folder button between "select" and "change".
    pub fn update_select_folder_button(&mut self, folder_selected: bool) {
        self.folder_selected = folder_selected;
    }

    #[must_use]
    pub fn select_folder_label(&self) -> String {
        if self.folder_selected {
            self.i18n.tr("change-folder-button")
        } else {
            self.i18n.tr("select-folder-button")
        }
    }

    pub fn set_select_folder_button_enabled(&mut self, enabled: bool) {
        self.select_folder_enabled = enabled;
    }

    #[must_use]
    pub fn is_select_folder_enabled(&self) -> bool {
        self.select_folder_enabled
    }

    /// Asks the user for the source folder. Returns `None` when the chooser
    /// is cancelled or another one is already open.
    pub fn ask_for_folder(&mut self) -> Option<PathBuf> {
        let title = self.i18n.tr("source-folder-dialog-title");
        self.pick_folder(&title)
    }

    pub(crate) fn pick_folder(&mut self, title: &str) -> Option<PathBuf> {
        if self.picker_open {
            tracing::debug!("folder chooser already open");
            return None;
        }
        self.picker_open = true;
        let picked = self.picker.pick_folder(title);
        self.picker_open = false;
        picked
    }

    pub(crate) fn open_link(&mut self, url: &str) -> std::io::Result<()> {
        self.links.open_link(url)
    }

    // =========================================================================
    // Modal state and dialogs
    // =========================================================================

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
        if open {
            self.menu_open = false;
        }
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub(crate) fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    #[must_use]
    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Message dialogs waiting for the current dialog to close.
    #[must_use]
    pub fn queued_messages(&self) -> usize {
        self.queued_messages.len()
    }

    pub(crate) fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
        self.set_modal_open(true);
    }

    pub(crate) fn close_dialog(&mut self) -> Option<Dialog> {
        let dialog = self.dialog.take();
        self.set_modal_open(false);
        dialog
    }

    pub(crate) fn queue_message(&mut self, dialog: MessageDialog) {
        self.queued_messages.push_back(dialog);
    }

    pub(crate) fn show_next_queued(&mut self) {
        if self.dialog.is_some() {
            return;
        }
        if let Some(next) = self.queued_messages.pop_front() {
            self.open_dialog(Dialog::Message(next));
        }
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    #[must_use]
    pub fn feedback_state(&self, target: FeedbackTarget) -> PulseState {
        self.pulses.state(target)
    }

    #[must_use]
    pub fn pending_feedback(&self) -> usize {
        self.pulses.pending()
    }

    /// Whether the tick subscription has to run.
    #[must_use]
    pub fn has_pending_feedback(&self) -> bool {
        self.pulses.has_pending()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Runs the close handler (once) and asks the shell to exit. An open
    /// category dialog is cancelled first so its callback still runs.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        tracing::debug!("window closing");
        if matches!(self.dialog, Some(Dialog::Category(_))) {
            dialogs::cancel_category(self);
        }
        self.invoke(Gesture::Close);
        self.exit_requested = true;
    }

    /// Requests exit from inside a handler.
    pub fn quit(&mut self) {
        self.exit_requested = true;
        self.destroy();
    }

    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
