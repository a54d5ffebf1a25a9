//! Unit tests for config module
//!
//! Tests configuration types, defaults, validation and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use crate::{
    SysvolError,
    config::{AudioConfig, BackendPreference, Config, ConfigPaths, LogLevel},
    services::{BackendKind, SinkId},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.audio.backend, BackendPreference::Auto);
    assert_eq!(config.audio.sink, None);
    assert_eq!(config.audio.step, AudioConfig::DEFAULT_STEP);
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = config.to_toml_string().unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[audio]"));
    assert!(toml_str.contains("backend = \"auto\""));
    assert!(!toml_str.contains("sink"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [audio]
        backend = "amixer"
        sink = 2
        step = 10
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.audio.backend, BackendPreference::Amixer);
    assert_eq!(config.audio.sink, Some(SinkId(2)));
    assert_eq!(config.audio.step, 10);
}

#[test]
fn config_serialize_roundtrip_with_sink() {
    let mut original = Config::default();
    original.audio.sink = Some(SinkId(4));

    let toml_str = original.to_toml_string().unwrap();
    let deserialized = Config::from_toml_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_audio_section() {
    let config = Config::from_toml_str("[audio]\nbackend = \"pactl\"\n").unwrap();

    assert_eq!(config.audio.backend, BackendPreference::Pactl);
    assert_eq!(config.audio.step, AudioConfig::DEFAULT_STEP);
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [general
        invalid syntax here
    "#;

    let result = Config::from_toml_str(invalid_toml);
    assert!(matches!(result, Err(SysvolError::TomlParseError { .. })));
}

#[test]
fn config_unknown_backend_rejected() {
    let result = Config::from_toml_str("[audio]\nbackend = \"oss\"\n");
    assert!(result.is_err());
}

#[test]
fn config_step_out_of_range() {
    for step in [0, 101, 255] {
        let toml_str = format!("[audio]\nstep = {step}\n");
        let result = Config::from_toml_str(&toml_str);

        match result {
            Err(SysvolError::InvalidConfigField { field, .. }) => assert_eq!(field, "step"),
            other => panic!("expected step validation error, got {other:?}"),
        }
    }
}

#[test]
fn config_unknown_fields() {
    let toml_with_unknown = r#"
        [general]
        log_level = "info"
        unknown_field = "should be ignored"

        [unknown_section]
        some_field = "ignored"
    "#;

    let config = Config::from_toml_str(toml_with_unknown).unwrap();
    assert_eq!(config.general.log_level, LogLevel::Info);
}

#[test]
fn backend_preference_forced() {
    assert_eq!(BackendPreference::Auto.forced(), None);
    assert_eq!(BackendPreference::Pactl.forced(), Some(BackendKind::Pactl));
    assert_eq!(BackendPreference::Amixer.forced(), Some(BackendKind::Amixer));
}

#[test]
fn get_by_path_reads_nested_values() {
    let config = Config::from_toml_str("[audio]\nstep = 7\n").unwrap();

    assert_eq!(
        config.get_by_path("audio.step").unwrap().as_integer(),
        Some(7)
    );
    assert_eq!(
        config.get_by_path("general.log_level").unwrap().as_str(),
        Some("warn")
    );
    assert!(config.get_by_path("audio").unwrap().is_table());
}

#[test]
fn get_by_path_unknown_key() {
    let config = Config::default();

    assert!(config.get_by_path("audio.volume").is_err());
    assert!(config.get_by_path("audio.step.value").is_err());
}

#[test]
fn config_paths_prefer_xdg() {
    let dir = ConfigPaths::config_dir_from(
        Some("/xdg".to_string()),
        Some("/home/user".to_string()),
    )
    .unwrap();

    assert_eq!(dir, PathBuf::from("/xdg/sysvol"));
}

#[test]
fn config_paths_fall_back_to_home() {
    let dir = ConfigPaths::config_dir_from(Some(String::new()), Some("/home/user".to_string()))
        .unwrap();

    assert_eq!(dir, PathBuf::from("/home/user/.config/sysvol"));
}

#[test]
fn config_paths_need_some_base() {
    assert!(ConfigPaths::config_dir_from(None, None).is_err());
}

#[test]
fn log_level_display_matches_serde() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let toml_str = format!("[general]\nlog_level = \"{level}\"\n");
        let config = Config::from_toml_str(&toml_str).unwrap();
        assert_eq!(config.general.log_level, level);
    }
}
