use std::fs;

use funcmap::defaults::{
    load_config_from_file, load_config_or_default, reset_config_at, save_config_to,
    FuncmapConfig,
};
use funcmap::{ErrorCode, Registry, Value};
use tempfile::TempDir;

#[test]
fn saved_config_drives_registry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("funcmap.json");

    let mut config = FuncmapConfig::default();
    config.dates.zone = "UTC".to_string();
    config.dates.html_format = "%d.%m.%Y".to_string();
    config.registry.disabled.push("env".to_string());
    save_config_to(&path, &config).unwrap();

    let loaded = load_config_or_default(&path);
    assert_eq!(loaded, config);

    let registry = Registry::from_config(&loaded);
    assert!(!registry.contains("env"));
    assert_eq!(
        registry.call("htmlDate", &[Value::from(0)]).unwrap(),
        Value::from("01.01.1970")
    );
}

#[test]
fn invalid_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("funcmap.json");
    fs::write(&path, "{ not json").unwrap();

    assert_eq!(
        load_config_from_file(&path).unwrap_err().code,
        ErrorCode::ConfigInvalidJson
    );
    assert_eq!(load_config_or_default(&path), FuncmapConfig::default());
}

#[test]
fn unknown_zone_is_rejected_on_load_and_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("funcmap.json");
    fs::write(&path, r#"{"dates": {"zone": "Mars/Olympus"}}"#).unwrap();

    assert_eq!(
        load_config_from_file(&path).unwrap_err().code,
        ErrorCode::ConfigInvalidValue
    );

    let mut config = FuncmapConfig::default();
    config.dates.zone = "Mars/Olympus".to_string();
    assert!(save_config_to(&path, &config).is_err());
}

#[test]
fn reset_removes_file_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("funcmap.json");
    save_config_to(&path, &FuncmapConfig::default()).unwrap();

    assert!(reset_config_at(&path).unwrap());
    assert!(!reset_config_at(&path).unwrap());
    assert_eq!(load_config_or_default(&path), FuncmapConfig::default());
}
