// SPDX-License-Identifier: MIT
//! In-memory controller driving the window without touching any files.
//!
//! It answers every gesture the window reports so the whole interface can be
//! tried out: categories are kept in the window's own snapshot, navigation
//! only updates the status line, and nothing is scanned, moved or saved.

use crate::error::{Error, Result};
use crate::ui::dialogs::{self, CategoryOutcome};
use crate::ui::window::categories::{Category, CategoryIndex};
use crate::ui::window::Window;
use image_rs::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Registers the preview handlers and shows `startup_image` if given.
pub fn install(window: &mut Window, startup_image: Option<PathBuf>) {
    window.on_select_folder(select_folder);
    window.on_next(|window| navigate(window, "preview-next"));
    window.on_prev(|window| navigate(window, "preview-previous"));
    window.add_reset_button(reset);
    window.on_close(|_| tracing::info!("preview controller shutting down"));

    for index in CategoryIndex::ALL {
        window.bind_category(index, category_clicked, open_configuration);
    }

    if let Some(path) = startup_image {
        show_file(window, &path);
    }
}

fn select_folder(window: &mut Window) {
    let Some(folder) = window.ask_for_folder() else {
        return;
    };
    tracing::info!(folder = %folder.display(), "source folder selected");
    window.set_selected_folder_path(&folder);
    let text = window.i18n().tr("preview-folder-selected");
    window.update_status(text, None);
}

fn navigate(window: &mut Window, key: &str) {
    let text = window.i18n().tr(key);
    window.update_status(text, None);
}

fn reset(window: &mut Window) {
    window.set_categories(&[]);
    window.set_selected_folder_path("");
    window.show_image(None);
    let text = window.i18n().tr("status-select-folder");
    window.update_status(text, None);
}

fn category_clicked(window: &mut Window, index: CategoryIndex) {
    let category = window.category(index).clone();
    if !category.is_defined() {
        open_configuration(window, index);
        return;
    }
    let text = window.i18n().tr_with_args(
        "preview-would-move",
        &[("name", category.name.as_str()), ("path", category.path.as_str())],
    );
    window.update_status(text, None);
}

fn open_configuration(window: &mut Window, index: CategoryIndex) {
    let initial = window.category(index).clone();
    dialogs::configure_category(window, index, initial, apply_outcome);
}

/// Writes a dialog outcome back into the window's category snapshot.
pub fn apply_outcome(window: &mut Window, outcome: CategoryOutcome) {
    let mut categories = window.categories();
    match outcome {
        CategoryOutcome::Save { index, name, path } => {
            categories[index.get()] = Category::new(name, path);
        }
        CategoryOutcome::Delete { index } => {
            categories[index.get()] = Category::default();
        }
        CategoryOutcome::Cancel { .. } => return,
    }
    window.set_categories(&categories);
}

fn show_file(window: &mut Window, path: &Path) {
    match load_image(path) {
        Ok((image, size_kb)) => {
            window.show_image(Some(&image));
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            window.update_status(format!("{name} (1/1)"), Some(size_kb));
            if let Some(parent) = path.parent() {
                window.set_selected_folder_path(parent);
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "startup image failed");
            dialogs::show_error(window, err.to_string());
        }
    }
}

/// Decodes `path` and returns it along with its size in kilobytes.
pub fn load_image(path: &Path) -> Result<(DynamicImage, f64)> {
    let size_kb = fs::metadata(path)?.len() as f64 / 1024.0;
    let image = image_rs::open(path).map_err(Error::from)?;
    Ok((image, size_kb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::fluent::I18n;
    use crate::ui::dialogs::Dialog;
    use crate::ui::folder_picker::FolderPicker;
    use crate::ui::window::categories::SlotState;
    use crate::ui::window::Message;
    use image_rs::{Rgba, RgbaImage};
    use std::time::Duration;
    use tempfile::tempdir;

    struct FixedPicker(Option<PathBuf>);

    impl FolderPicker for FixedPicker {
        fn pick_folder(&mut self, _title: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn window(picked: Option<&str>) -> Window {
        Window::new(
            I18n::new(Some("en-US".to_string()), &Config::default()),
            Duration::from_millis(50),
        )
        .with_folder_picker(FixedPicker(picked.map(PathBuf::from)))
    }

    #[test]
    fn select_folder_pushes_chosen_path() {
        let mut window = window(Some("/photos/inbox"));
        install(&mut window, None);
        window.update(Message::SelectFolderPressed);
        assert_eq!(window.selected_folder(), Some(Path::new("/photos/inbox")));
        assert_eq!(window.select_folder_label(), "Change Source Folder");
    }

    #[test]
    fn cancelled_folder_choice_changes_nothing() {
        let mut window = window(None);
        install(&mut window, None);
        window.update(Message::SelectFolderPressed);
        assert_eq!(window.selected_folder(), None);
    }

    #[test]
    fn empty_slot_click_opens_configuration_and_save_defines_it() {
        let mut window = window(None);
        install(&mut window, None);
        let slot = CategoryIndex::ALL[1];

        window.update(Message::CategoryPressed(slot));
        assert!(matches!(window.dialog(), Some(Dialog::Category(_))));

        use crate::ui::dialogs::{category, Message as DialogMessage};
        window.update(Message::Dialog(DialogMessage::Category(
            category::Message::NameChanged("Pets".into()),
        )));
        window.update(Message::Dialog(DialogMessage::Category(
            category::Message::PathChanged("/pets".into()),
        )));
        window.update(Message::Dialog(DialogMessage::Category(
            category::Message::Save,
        )));

        assert!(!window.is_modal_open());
        assert_eq!(window.slot_state(slot), SlotState::Defined);
        assert_eq!(window.category_label(slot), "2: Pets");
    }

    #[test]
    fn defined_slot_click_reports_target() {
        let mut window = window(None);
        install(&mut window, None);
        window.set_categories(&[Category::new("Pets", "/pets")]);
        window.update(Message::CategoryPressed(CategoryIndex::ALL[0]));
        assert!(window.dialog().is_none());
        assert!(window.status().contains("/pets"));
    }

    #[test]
    fn delete_outcome_clears_slot() {
        let mut window = window(None);
        window.set_categories(&[Category::new("Pets", "/pets")]);
        apply_outcome(
            &mut window,
            CategoryOutcome::Delete {
                index: CategoryIndex::ALL[0],
            },
        );
        assert_eq!(window.slot_state(CategoryIndex::ALL[0]), SlotState::Unconfigured);
    }

    #[test]
    fn reset_clears_categories_and_folder() {
        let mut window = window(None);
        install(&mut window, None);
        window.set_categories(&[Category::new("Pets", "/pets")]);
        window.set_selected_folder_path("/photos");
        window.update(Message::ResetPressed);
        assert_eq!(window.slot_state(CategoryIndex::ALL[0]), SlotState::Unconfigured);
        assert_eq!(window.selected_folder(), None);
    }

    #[test]
    fn startup_image_is_shown_with_size() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("sample.png");
        RgbaImage::from_pixel(40, 20, Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("write png");

        let mut window = window(None);
        install(&mut window, Some(path));
        assert!(!window.display().is_placeholder());
        assert!(window.status().starts_with("sample.png ["));
        assert!(window.status().ends_with("KB] (1/1)"));
    }

    #[test]
    fn unreadable_startup_image_shows_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not a png").expect("write file");

        let mut window = window(None);
        install(&mut window, Some(path));
        assert!(window.display().is_placeholder());
        assert!(matches!(window.dialog(), Some(Dialog::Message(_))));
    }
}
