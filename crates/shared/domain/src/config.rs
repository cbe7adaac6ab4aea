use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level site configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub api: ApiConfig,
    pub site: SiteMetaConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
    pub locations: LocationsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Remote content/lead API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
    /// Page size used while draining the published-articles listing.
    pub page_size: u32,
    pub endpoints: EndpointsConfig,
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Paths of the write endpoints, relative to [`ApiConfig::base_url`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub attorney_application: String,
    pub contact: String,
    pub newsletter: String,
}

/// Public site metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteMetaConfig {
    pub url: String,
}

impl SiteMetaConfig {
    /// Site URL without a trailing slash, ready for path joining.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Toast presentation knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
    pub capacity: usize,
}

impl NotificationConfig {
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Location reference data.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocationsConfig {
    /// Dataset file replacing the bundled one; same JSON shape.
    pub dataset: Option<PathBuf>,
}

/// Log output for hosts that install the site logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Extra `EnvFilter` directives, e.g. `gway_leads=debug`.
    pub directives: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; `None` disables file output.
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fronterainfotech.com/v1".to_owned(),
            timeout_secs: None,
            page_size: 100,
            endpoints: EndpointsConfig::default(),
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            attorney_application: "/attorneys/apply".to_owned(),
            contact: "/contact".to_owned(),
            newsletter: "/newsletter/subscribe".to_owned(),
        }
    }
}

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self { url: "https://www.greenwaylawyer.com/".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directives: None,
            console: true,
            dir: None,
            json: false,
            max_files: 10,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 4000, capacity: 32 }
    }
}
