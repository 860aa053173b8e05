// SPDX-License-Identifier: MIT
use photo_sorter::config::{self, Config, FeedbackConfig, GeneralConfig};
use photo_sorter::i18n::fluent::I18n;
use photo_sorter::ui::theming::ThemeMode;
use photo_sorter::ui::window::Window;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_with_override(&english, Some(dir.path().to_path_buf()))
        .expect("Failed to write english config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("reset-button"), "Reset");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_with_override(&french, Some(dir.path().to_path_buf()))
        .expect("Failed to write french config");
    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("reset-button"), "Réinitialiser");
}

#[test]
fn cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn french_window_uses_french_labels() {
    let config = Config::default();
    let i18n = I18n::new(Some("fr".to_string()), &config);
    let window = Window::new(i18n, config.feedback.pulse_duration());
    assert_eq!(window.folder_path_text(), "Aucun dossier sélectionné");
    assert_eq!(window.select_folder_label(), "Choisir le dossier source");
}

#[test]
fn pulse_duration_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        feedback: FeedbackConfig { pulse_ms: Some(120) },
        ..Config::default()
    };

    config::save_to_path(&config, &path).expect("save settings");
    let loaded = config::load_from_path(&path).expect("load settings");
    assert_eq!(loaded.feedback.pulse_duration(), Duration::from_millis(120));
}
