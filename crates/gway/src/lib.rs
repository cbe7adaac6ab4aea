//! Facade crate for the Greenway site features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `gway` with the desired slice features (all enabled by default).
//! - Call [`bootstrap`] with a loaded [`SiteConfig`] to get a [`SiteState`]
//!   holding the shared services and every enabled slice.
//! - With the `logger` feature, [`install_logging`] sets up tracing from the
//!   `logging` section first so slice initialization is captured.

pub use gway_domain as domain;
use gway_domain::config::SiteConfig;
use gway_domain::registry::InitializedSlice;
pub use gway_kernel as kernel;
use gway_kernel::state::SiteState;
#[cfg(feature = "logger")]
pub use gway_logger as logger;
use std::error::Error;

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "articles")]
    pub use gway_articles as articles;
    #[cfg(feature = "leads")]
    pub use gway_leads as leads;
    #[cfg(feature = "locations")]
    pub use gway_locations as locations;
    #[cfg(feature = "newsletter")]
    pub use gway_newsletter as newsletter;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "locations")]
        "locations",
        #[cfg(feature = "leads")]
        "leads",
        #[cfg(feature = "newsletter")]
        "newsletter",
        #[cfg(feature = "articles")]
        "articles",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[allow(unused_variables, unused_mut)]
pub fn init(config: &SiteConfig) -> Result<Vec<InitializedSlice>, BoxError> {
    let mut slices = Vec::new();

    #[cfg(feature = "locations")]
    slices.push(features::locations::init(config)?);

    #[cfg(feature = "leads")]
    slices.push(features::leads::init(config)?);

    #[cfg(feature = "newsletter")]
    slices.push(features::newsletter::init(config)?);

    #[cfg(feature = "articles")]
    slices.push(features::articles::init(config)?);

    tracing::info!(slices = slices.len(), enabled = ?features::ENABLED, "Site features initialized");

    Ok(slices)
}

/// Builds the site state: shared services derived from `config` plus every
/// enabled slice.
///
/// # Errors
/// Returns an error if a slice fails to initialize or the state is invalid.
pub fn bootstrap(config: SiteConfig) -> Result<SiteState, BoxError> {
    let slices = init(&config)?;
    Ok(SiteState::builder().config(config).register_slices(slices).build()?)
}

/// Installs the global tracing subscriber from `config.logging`.
///
/// # Errors
/// Returns an error for an invalid logging section or when a subscriber is
/// already installed.
#[cfg(feature = "logger")]
pub fn install_logging(config: &SiteConfig) -> Result<logger::Logger, BoxError> {
    Ok(logger::Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?)
}
