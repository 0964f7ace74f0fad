use atlas_domain::config::{ApiConfig, AtlasConfig, LoggingConfig, UiConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let api = ApiConfig::default();
    assert_eq!(api.base_url, "https://restcountries.com/");
    assert_eq!(api.timeout_secs, 15);

    let ui = UiConfig::default();
    assert_eq!(ui.default_map, "/images/world-map.jpg");
    assert_eq!(ui.country_list_limit, 50);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);
}

#[test]
fn atlas_config_deserializes_partial_sections() {
    let raw = json!({
        "api": { "base_url": "http://127.0.0.1:9000/" },
        "ui": { "country_list_limit": 10 },
        "logging": { "directory": "/tmp/atlas-logs", "json": true }
    });

    let cfg: AtlasConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.base_url, "http://127.0.0.1:9000/");
    assert_eq!(cfg.api.timeout_secs, 15, "missing keys keep their defaults");
    assert_eq!(cfg.ui.country_list_limit, 10);
    assert_eq!(cfg.ui.title, "World Explorer");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/atlas-logs")));
    assert!(cfg.logging.json);
}

#[test]
fn clones_share_until_mutated() {
    let original = AtlasConfig::default();
    let mut edited = original.clone();
    edited.ui.country_list_limit = 5;

    assert_eq!(original.ui.country_list_limit, 50);
    assert_eq!(edited.ui.country_list_limit, 5);
}
