use atlas_kernel::config::{ConfigError, load_app_config};
use serial_test::serial;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CHILD_CONFIG_PATH: &str = "ATLAS_TEST_CHILD_CONFIG";

#[test]
#[serial]
fn missing_default_file_yields_defaults() {
    let cfg = load_app_config(None::<&str>).expect("defaults should load");
    assert_eq!(cfg.api.base_url, "https://restcountries.com/");
    assert_eq!(cfg.ui.country_list_limit, 50);
}

#[test]
#[serial]
fn explicit_file_must_exist() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("nowhere.toml");

    let err = load_app_config(Some(&missing)).expect_err("missing file is an error");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("atlas.toml");
    fs::write(
        &path,
        r#"
[api]
base_url = "http://localhost:8080/"
timeout_secs = 3

[ui]
country_list_limit = 20
"#,
    )
    .expect("write config");

    let cfg = load_app_config(Some(&path)).expect("file should load");
    assert_eq!(cfg.api.base_url, "http://localhost:8080/");
    assert_eq!(cfg.api.timeout_secs, 3);
    assert_eq!(cfg.ui.country_list_limit, 20);
    assert_eq!(cfg.ui.title, "World Explorer");
}

/// Environment mutation is `unsafe` in edition 2024, so the override check runs in a child
/// process that inherits a prepared environment.
#[test]
#[serial]
fn environment_overrides_file() {
    if let Ok(path) = std::env::var(CHILD_CONFIG_PATH) {
        let cfg = load_app_config(Some(&path)).expect("config should load");
        assert_eq!(cfg.ui.country_list_limit, 7);
        assert_eq!(cfg.api.timeout_secs, 30);
        return;
    }

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("atlas.toml");
    fs::write(&path, "[ui]\ncountry_list_limit = 20\n").expect("write config");

    let status = Command::new(std::env::current_exe().expect("test binary path"))
        .args(["--exact", "environment_overrides_file", "--test-threads=1"])
        .env(CHILD_CONFIG_PATH, &path)
        .env("ATLAS__UI__COUNTRY_LIST_LIMIT", "7")
        .env("ATLAS__API__TIMEOUT_SECS", "30")
        .status()
        .expect("spawn child test");

    assert!(status.success(), "child process should see the overrides");
}
