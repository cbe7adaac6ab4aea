//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for a Greenway host.
//!
//! Output goes to the console, to a rolling file directory, or both. The
//! minimum level and extra directives (e.g. `gway_leads=debug`) come either
//! from [`LoggingConfig`] through [`Logger::from_config`] or from the typed
//! [`LoggerBuilder`]. `RUST_LOG` is honoured when no directives are given.
//!
//! ```rust,no_run
//! use gway_logger::{LevelFilter, Logger};
//!
//! # fn main() -> Result<(), gway_logger::LoggerError> {
//! let _logger = Logger::builder().name("greenway").level(LevelFilter::DEBUG).init()?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use gway_domain::config::LoggingConfig;
use private::Sealed;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct Settings {
    console: bool,
    dir: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    directives: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            dir: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            directives: None,
        }
    }
}

/// Builder state: no name yet.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state: named; the name prefixes rolling files.
#[derive(Debug)]
pub struct Named(String);
/// Builder state: console output only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Builder state: a log directory is set.
#[derive(Debug)]
pub struct Rolling;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for Rolling {}

/// Typed builder for the global subscriber.
///
/// A name is required before [`init`](LoggerBuilder::init) is reachable, and
/// file-only knobs (rotation, retention, JSON) unlock once a directory is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, O: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    output: PhantomData<O>,
}

impl<O: Sealed> LoggerBuilder<Unnamed, O> {
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, O> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), output: PhantomData }
    }
}

impl LoggerBuilder<Named, Rolling> {
    /// How many rotated files to keep.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Writes file records as JSON lines. Console output stays compact.
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.settings.json = true;
        self
    }
}

impl<O: Sealed> LoggerBuilder<Named, O> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Extra `EnvFilter` directives such as `gway_articles=debug`.
    ///
    /// When set, `RUST_LOG` is ignored. A malformed string fails [`init`](Self::init).
    #[must_use]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    pub fn dir(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, Rolling> {
        let mut settings = self.settings;
        settings.dir = Some(dir.into());
        LoggerBuilder { settings, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the life of the process; it owns
    /// the background writer of the file output.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an empty name, zero retention,
    /// bad directives or no enabled output. [`LoggerError::Subscriber`] when a
    /// global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name), .. } = self;
        check(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &settings.dir {
            Some(dir) => {
                let (file_layer, guard) = rolling_layer(&settings, dir, &name)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Neither console nor file output is enabled".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, file = guard.is_some(), "Logger installed");

        Ok(Logger { guard })
    }
}

/// Live logging handle. Dropping it flushes and stops the file writer.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, output: PhantomData }
    }

    /// Installs the subscriber described by the `logging` section of the site config.
    ///
    /// # Errors
    /// Fails on an unknown level name, plus everything [`LoggerBuilder::init`] rejects.
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let builder = Self::builder().name(name).level(level).console(config.console);
        let builder = match &config.directives {
            Some(directives) => builder.directives(directives.as_str()),
            None => builder,
        };

        match &config.dir {
            Some(dir) => {
                let rolling = builder.dir(dir).max_files(config.max_files);
                if config.json { rolling.json().init() } else { rolling.init() }
            },
            None => builder.init(),
        }
    }

    /// Whether records are also written to a log directory.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing log files");
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|err| LoggerError::InvalidConfiguration {
        message: format!("'{level}': {err}").into(),
        context: Some("Parsing logging.level".into()),
    })
}

fn check(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.dir.is_some() && settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.directives {
        Some(directives) => builder.parse(directives).map_err(|err| {
            LoggerError::InvalidConfiguration {
                message: format!("'{directives}': {err}").into(),
                context: Some("Parsing log directives".into()),
            }
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

fn rolling_layer(
    settings: &Settings,
    dir: &Path,
    name: &str,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggerError::Io {
        source,
        context: Some(format!("Creating {}", dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = layer().with_writer(writer).with_ansi(false);
    let boxed = if settings.json { file_layer.json().boxed() } else { file_layer.boxed() };
    Ok((boxed, guard))
}
