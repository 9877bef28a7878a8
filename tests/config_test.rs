//! Integration tests for Settings loading with layered merge semantics.
//!
//! Note: These tests run without a global config (temp directories only),
//! so they exercise the local layer on top of the compiled defaults.

use std::fs;

use tempfile::TempDir;

use nstree::application::{ApplicationError, ListStyle};
use nstree::config::{local_config_path, Settings};
use nstree::domain::CollisionPolicy;

// ============================================================
// Settings::load() local layer
// ============================================================

#[test]
fn given_no_local_config_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.on_collision, CollisionPolicy::Replace);
    assert_eq!(settings.list_style, ListStyle::Indent);
    assert!(!settings.strict);
}

#[test]
fn given_partial_local_config_when_load_then_unset_keys_inherit() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "on_collision = \"reject\"\n").unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.on_collision, CollisionPolicy::Reject);
    assert_eq!(
        settings.list_style,
        ListStyle::Indent,
        "list_style not set locally, default kept"
    );
    assert!(!settings.strict);
}

#[test]
fn given_full_local_config_when_load_then_all_keys_replaced() {
    let dir = TempDir::new().unwrap();
    let config = r#"
on_collision = "reject"
list_style = "tree"
strict = true
"#;
    fs::write(local_config_path(dir.path()), config).unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(
        settings,
        Settings {
            on_collision: CollisionPolicy::Reject,
            list_style: ListStyle::Tree,
            strict: true,
        }
    );
}

#[test]
fn given_malformed_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "on_collision = \"shrug\"\n").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains(".nstree.toml"));
}

// ============================================================
// Settings::load_file_only()
// ============================================================

#[test]
fn given_single_file_when_load_file_only_then_defaults_fill_gaps() {
    let dir = TempDir::new().unwrap();
    let path = local_config_path(dir.path());
    fs::write(&path, "list_style = \"tree\"\n").unwrap();

    let settings = Settings::load_file_only(&path).expect("load file");

    assert_eq!(settings.list_style, ListStyle::Tree);
    assert_eq!(settings.on_collision, CollisionPolicy::Replace);
}

#[test]
fn given_missing_file_when_load_file_only_then_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        Settings::load_file_only(&path),
        Err(ApplicationError::Config { .. })
    ));
}

// ============================================================
// Template and serialization
// ============================================================

#[test]
fn given_template_when_loaded_then_equals_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), Settings::template()).unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load template");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_settings_when_to_toml_then_parses_back() {
    let settings = Settings {
        on_collision: CollisionPolicy::Reject,
        list_style: ListStyle::Tree,
        strict: true,
    };

    let text = settings.to_toml().unwrap();
    assert!(text.contains("on_collision = \"reject\""));

    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}
