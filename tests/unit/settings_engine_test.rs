//! Integration-level unit tests for the SettingsEngine public API.

use glassdesk::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use glassdesk::types::errors::SettingsError;
use glassdesk::types::settings::{AppSettings, IpLookupMode};
use serde_json::json;
use tempfile::TempDir;

/// The caller holds the `TempDir` so the file lives for the whole test.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load().unwrap(), AppSettings::default());
}

#[test]
fn test_defaults_match_desktop_behaviour() {
    let s = AppSettings::default();
    assert_eq!(s.generator.default_length, 16);
    assert_eq!((s.generator.min_length, s.generator.max_length), (6, 64));
    assert_eq!(s.dashboard.stats_interval_ms, 2000);
    assert_eq!(s.network.ip_lookup, IpLookupMode::Local);
    assert_eq!(s.rpc.max_requests_per_second, 200);
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("generator.default_length", json!(20)).unwrap();
        engine.set_value("network.ip_lookup", json!("public")).unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.generator.default_length, 20);
    assert_eq!(loaded.network.ip_lookup, IpLookupMode::Public);
}

#[test]
fn test_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(matches!(engine.set_value("generator.colour", json!(1)), Err(SettingsError::InvalidKey(_))));
    assert!(matches!(engine.set_value("nope.length", json!(1)), Err(SettingsError::InvalidKey(_))));
    assert!(matches!(engine.set_value("", json!(1)), Err(SettingsError::InvalidKey(_))));
}

#[test]
fn test_wrong_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    let res = engine.set_value("generator.max_length", json!("lots"));
    assert!(matches!(res, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().generator.max_length, 64);
}

#[test]
fn test_inconsistent_bounds_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    let res = engine.set_value("generator.max_length", json!(10));
    assert!(matches!(res, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().generator.max_length, 64);
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_partial_file_fills_missing_sections() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"dashboard": {"stats_interval_ms": 500}}"#,
    )
    .unwrap();
    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.dashboard.stats_interval_ms, 500);
    assert_eq!(loaded.generator, AppSettings::default().generator);
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.set_value("rpc.max_requests_per_second", json!(5)).unwrap();

    engine.reset().unwrap();

    assert_eq!(engine.get_settings(), &AppSettings::default());
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), AppSettings::default());
}
