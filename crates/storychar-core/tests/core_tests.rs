//! Tests for storychar-core: record normalization, wire leniency, and config loading

use std::path::PathBuf;
use std::time::Duration;
use storychar_core::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use storychar_core::*;

fn test_dir() -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("storychar-core-test-{}-{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &std::path::Path) {
    let _ = std::fs::remove_dir_all(dir);
}

// ===========================================================================
// CharacterRecord
// ===========================================================================

#[test]
fn character_record_new() {
    let r = CharacterRecord::new("Lynx Oracle", "A seer.");
    assert_eq!(r.name, "Lynx Oracle");
    assert_eq!(r.description, "A seer.");
}

#[test]
fn character_record_serde() {
    let r = CharacterRecord::new("Iron Owl Shaman", "Nocturnal wisdom.");
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains(r#""name":"Iron Owl Shaman""#));
    let back: CharacterRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}

// ===========================================================================
// RawCharacter
// ===========================================================================

#[test]
fn raw_character_empty_object() {
    let raw: RawCharacter = serde_json::from_str("{}").unwrap();
    assert!(raw.name.is_none());
    assert!(raw.description.is_none());
}

#[test]
fn raw_character_ignores_unknown_fields() {
    let raw: RawCharacter = serde_json::from_str(
        r#"{"name":"Spirit-Pike Warrior","description":"A hero.","id":42,"tags":["myth"]}"#,
    )
    .unwrap();
    assert_eq!(raw.name.as_deref(), Some("Spirit-Pike Warrior"));
    assert_eq!(raw.description.as_deref(), Some("A hero."));
}

#[test]
fn raw_character_null_fields() {
    let raw: RawCharacter =
        serde_json::from_str(r#"{"name":null,"description":null}"#).unwrap();
    assert!(raw.name.is_none());
    assert!(raw.description.is_none());
}

// ===========================================================================
// Normalization
// ===========================================================================

#[test]
fn normalize_keeps_populated_fields() {
    let raw = RawCharacter {
        name: Some("Cloud Elk Guardian".into()),
        description: Some("A sky-traveling protector.".into()),
    };
    let r = raw.normalize();
    assert_eq!(r.name, "Cloud Elk Guardian");
    assert_eq!(r.description, "A sky-traveling protector.");
}

#[test]
fn normalize_defaults_missing_fields() {
    let r = RawCharacter::default().normalize();
    assert_eq!(r.name, DEFAULT_NAME);
    assert_eq!(r.description, DEFAULT_DESCRIPTION);
}

#[test]
fn normalize_defaults_empty_name_only() {
    let raw = RawCharacter {
        name: Some(String::new()),
        description: Some("Still here.".into()),
    };
    let r = raw.normalize();
    assert_eq!(r.name, DEFAULT_NAME);
    assert_eq!(r.description, "Still here.");
}

#[test]
fn normalize_defaults_whitespace_description() {
    let raw = RawCharacter {
        name: Some("Named".into()),
        description: Some("   ".into()),
    };
    let r = raw.normalize();
    assert_eq!(r.name, "Named");
    assert_eq!(r.description, DEFAULT_DESCRIPTION);
}

#[test]
fn normalize_via_from_impl() {
    let r: CharacterRecord = RawCharacter::default().into();
    assert_eq!(r.name, DEFAULT_NAME);
}

#[test]
fn defaults_are_fixed_strings() {
    assert_eq!(DEFAULT_NAME, "Hybrid_Character");
    assert_eq!(DEFAULT_DESCRIPTION, "No description available.");
}

// ===========================================================================
// StorycharConfig
// ===========================================================================

#[test]
fn config_missing_file_yields_defaults() {
    let config = StorycharConfig::load(std::path::Path::new("/nonexistent/config.json"));
    assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(!config.offline_forced());
}

#[test]
fn config_invalid_json_yields_defaults() {
    let dir = test_dir();
    let path = dir.join("config.json");
    std::fs::write(&path, "not json at all").unwrap();

    let config = StorycharConfig::load(&path);
    assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    assert!(!config.offline_forced());

    cleanup(&dir);
}

#[test]
fn config_full_file() {
    let dir = test_dir();
    let path = dir.join("config.json");
    std::fs::write(
        &path,
        r#"{"api":{"endpoint":"http://localhost:9999/characters","timeoutSecs":2},"offline":true}"#,
    )
    .unwrap();

    let config = StorycharConfig::load(&path);
    assert_eq!(config.endpoint(), "http://localhost:9999/characters");
    assert_eq!(config.timeout(), Duration::from_secs(2));
    assert!(config.offline_forced());

    cleanup(&dir);
}

#[test]
fn config_partial_file_keeps_other_defaults() {
    let dir = test_dir();
    let path = dir.join("config.json");
    std::fs::write(&path, r#"{"offline":true}"#).unwrap();

    let config = StorycharConfig::load(&path);
    assert!(config.offline_forced());
    assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    cleanup(&dir);
}

#[test]
fn config_default_path_under_home() {
    let path = StorycharConfig::default_path();
    assert!(path.ends_with(".storychar/config.json"));
}

// ===========================================================================
// Error
// ===========================================================================

#[test]
fn error_display_messages() {
    let e = Error::config_error("bad endpoint");
    assert_eq!(e.to_string(), "config error: bad endpoint");
}

#[test]
fn config_try_load_missing_file_errors() {
    let err = StorycharConfig::try_load(std::path::Path::new("/nonexistent/config.json"))
        .unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn config_try_load_invalid_json_errors() {
    let dir = test_dir();
    let path = dir.join("config.json");
    std::fs::write(&path, "{ nope").unwrap();

    let err = StorycharConfig::try_load(&path).unwrap_err();
    assert!(matches!(err, Error::JsonError(_)));

    cleanup(&dir);
}

#[test]
fn error_from_json_error() {
    let json_err = serde_json::from_str::<CharacterRecord>("{").unwrap_err();
    let e: Error = json_err.into();
    assert!(e.to_string().starts_with("json error:"));
}
