use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AtlasConfigInner {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AtlasConfig {
    #[serde(flatten, default)]
    inner: Arc<AtlasConfigInner>,
}

impl Deref for AtlasConfig {
    type Target = AtlasConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AtlasConfig {
    fn deref_mut(&mut self) -> &mut AtlasConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// REST Countries endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root; `/v3.1/...` paths are appended to it.
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Presentation knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    /// Map shown until the user picks one.
    pub default_map: String,
    /// Maximum number of entries rendered by the countries dropdown; `0` shows them all.
    pub country_list_limit: usize,
}

/// Native logging settings; ignored by the web build.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`"info"`, `"atlas_countries=debug"`); `RUST_LOG` still wins.
    pub level: String,
    /// Directory for rolling log files. Console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "https://restcountries.com/".to_owned(), timeout_secs: 15 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "World Explorer".to_owned(),
            default_map: "/images/world-map.jpg".to_owned(),
            country_list_limit: 50,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
