use atlas_domain::config::AtlasConfig;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up in the working directory
/// (`atlas.toml`, `atlas.json`, ... any format the `config` crate understands).
pub const DEFAULT_CONFIG_NAME: &str = "atlas";

/// Prefix of environment overrides (`ATLAS__API__BASE_URL` maps to `api.base_url`).
pub const ENV_PREFIX: &str = "ATLAS";

/// Custom error type for config loading.
#[atlas_derive::atlas_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Defaults**: Every field of `T` falls back to its `serde` default.
/// 2. **Base File**: An explicit `path` must exist. Without one, `atlas.*` in the working
///    directory is used when present and silently skipped otherwise.
/// 3. **Environment Overrides**: Variables prefixed with `ATLAS__`, nested with double
///    underscores (e.g., `ATLAS__UI__COUNTRY_LIST_LIMIT=25` maps to `ui.country_list_limit`).
///
/// # Errors
/// This function will return an error if:
/// * An explicitly specified configuration file cannot be found.
/// * The file or the environment does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use atlas_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    info!(path = %effective_path.display(), required, "Loading configuration");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the application-wide [`AtlasConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AtlasConfig, ConfigError> {
    load_config(path)
}
