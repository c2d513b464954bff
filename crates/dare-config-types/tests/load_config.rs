// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Loading configuration files from disk

use dare_config_types::{ConfigError, EasingKind, Screen, UiConfig, load_from_file};
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let config = load_from_file(file.path()).expect("load");
    assert_eq!(config, UiConfig::default());
    assert_eq!(config.swipe.commit_threshold, 100.0);
    assert_eq!(config.animation.release_ms, 300);
    assert_eq!(config.animation.release_easing, EasingKind::EaseOut);
}

#[test]
fn partial_sections_merge_with_defaults() {
    let file = write_config(
        r#"
screen = "achievements"
viewer-id = "user3"

[swipe]
commit-threshold = 120.0

[animation]
release-ms = 450
release-easing = "linear"
"#,
    );
    let config = load_from_file(file.path()).expect("load");
    assert_eq!(config.screen, Screen::Achievements);
    assert_eq!(config.viewer_id.as_deref(), Some("user3"));
    assert_eq!(config.swipe.commit_threshold, 120.0);
    assert_eq!(config.swipe.exit_offset, 400.0);
    assert_eq!(config.animation.release_ms, 450);
    assert_eq!(config.animation.release_easing, EasingKind::Linear);
    assert_eq!(config.animation.hover_ms, 200);
}

#[test]
fn malformed_toml_reports_path() {
    let file = write_config("swipe = [not toml");
    let err = load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn invalid_values_are_rejected() {
    let file = write_config("[swipe]\nrotation-divisor = 0.0\n");
    let err = load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "swipe.rotation-divisor"));
}

#[test]
fn schema_names_kebab_case_keys() {
    let schema = dare_config_types::schema_json().expect("schema");
    assert!(schema.contains("commit-threshold"));
    assert!(schema.contains("pixels-per-column"));
}

fn rejected_field(content: &str) -> String {
    let file = write_config(content);
    match load_from_file(file.path()) {
        Err(ConfigError::InvalidValue { field, .. }) => field,
        other => panic!("expected InvalidValue for {content:?}, got {other:?}"),
    }
}

#[test]
fn negative_max_rotation_is_rejected() {
    assert_eq!(rejected_field("[swipe]\nmax-rotation = -15.0\n"), "swipe.max-rotation");
    assert_eq!(rejected_field("[swipe]\nmax-rotation = nan\n"), "swipe.max-rotation");
}

#[test]
fn max_scale_below_one_is_rejected() {
    assert_eq!(rejected_field("[swipe]\nmax-scale = 0.9\n"), "swipe.max-scale");
    let file = write_config("[swipe]\nmax-scale = 1.0\n");
    assert!(load_from_file(file.path()).is_ok());
}

#[test]
fn nan_effect_radius_is_rejected() {
    assert_eq!(rejected_field("[swipe]\nmax-effect-radius = nan\n"), "swipe.max-effect-radius");
}

#[test]
fn nan_commit_threshold_is_rejected() {
    assert_eq!(rejected_field("[swipe]\ncommit-threshold = nan\n"), "swipe.commit-threshold");
    assert_eq!(rejected_field("[swipe]\ncommit-threshold = -1.0\n"), "swipe.commit-threshold");
}
