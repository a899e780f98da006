//! Unit tests for configuration loading.

use aceest::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError, Theme};
use aceest::AppContext;
use aceest::workouts::WorkoutInput;
use tempfile::tempdir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert!(config.tracking.track_calories);
    assert_eq!(config.tracking.default_weight_kg, 70.0);
    assert_eq!(config.tracking.weekly_calorie_goal, 2000);
    assert_eq!(config.ui.theme, Theme::Dark);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[tracking]\ntrack_calories = false\n\n[ui]\ntheme = \"light\"\n")
        .unwrap();

    let config = load_config_from(&path).unwrap();
    assert!(!config.tracking.track_calories);
    assert_eq!(config.tracking.weekly_calorie_goal, 2000);
    assert_eq!(config.ui.theme, Theme::Light);
    assert_eq!(config.ui.font_scale, 1.0);
}

#[test]
fn test_invalid_values_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "[tracking]\ndefault_weight_kg = -3.0\n").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "[ui]\nfont_scale = 9.0\n").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "not = [valid").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.tracking.weekly_calorie_goal = 2500;
    config.ui.theme = Theme::Light;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.tracking.weekly_calorie_goal, 2500);
    assert_eq!(loaded.ui.theme, Theme::Light);
}

#[test]
fn test_context_follows_tracking_settings() {
    let mut config = AppConfig::default();
    config.tracking.track_calories = false;
    let mut context = AppContext::new(config);

    let entry = context
        .add_entry(&WorkoutInput::new("Workout", "Row", 20))
        .unwrap();
    assert_eq!(entry.calories, None);
    assert_eq!(context.summary().total_calories, None);
    assert_eq!(context.log().len(), 1);
}
