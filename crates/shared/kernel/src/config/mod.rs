use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`GWAY__API__BASE_URL` maps to `api.base_url`).
pub const ENV_PREFIX: &str = "GWAY";
/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "site";

/// Custom error type for config loading.
#[gway_derive::gway_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration object from a file layered under environment overrides.
///
/// 1. **Base file**: `path` (any format the `config` crate recognizes by
///    extension); defaults to `site` in the working directory. The file is
///    optional, so a host can run on defaults plus environment alone.
/// 2. **Environment**: variables prefixed with `GWAY__`, nested with `__`
///    (e.g. `GWAY__SITE__URL` maps to `site.url`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if a source is malformed or the merged
/// document does not match `T`.
///
/// # Example
/// ```rust
/// use gway_kernel::config::load_config;
/// use gway_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert!(!cfg.api.base_url.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
