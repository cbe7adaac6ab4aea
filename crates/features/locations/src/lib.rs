//! # Locations
//!
//! Static reference data for the address fields of the lead forms: the
//! first-level divisions (regions) of a country and the localities inside
//! each. The data ships with the crate and is parsed once on first use.
//!
//! Insular territories that the general dataset does not cover get their
//! localities from a small override table (see [`overrides`]).

pub mod dataset;
mod error;
pub mod overrides;
pub mod provider;

pub use crate::error::{LocationError, LocationErrorExt};
pub use crate::provider::{LocationCatalog, LocationProvider};
use gway_domain::config::SiteConfig;
use gway_domain::registry::InitializedSlice;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Country the site serves.
pub const US: &str = "US";

/// A first-level administrative division. Unique by `code` within a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }
}

/// A second-level division, scoped to one [`Region`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locality {
    pub name: String,
}

impl Locality {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Location feature state.
#[gway_derive::gway_slice]
pub struct Locations {
    pub provider: Arc<dyn LocationProvider>,
}

impl Locations {
    /// Handle over the bundled dataset, checked to cover [`US`].
    pub fn bundled() -> Result<Self, LocationError> {
        let catalog = LocationCatalog::bundled()?;
        catalog.require_country(US)?;
        Ok(Self::new(LocationsInner { provider: Arc::new(catalog) }))
    }

    /// Handle over `locations.dataset` when configured, the bundled data otherwise.
    pub fn from_config(config: &SiteConfig) -> Result<Self, LocationError> {
        let Some(path) = &config.locations.dataset else {
            return Self::bundled();
        };
        let catalog = LocationCatalog::from_path(path)?;
        catalog.require_country(US)?;
        info!(path = %path.display(), "Location dataset loaded from file");
        Ok(Self::new(LocationsInner { provider: Arc::new(catalog) }))
    }
}

/// Initialize the locations feature.
///
/// # Errors
/// Fails if the dataset cannot be read or parsed, or lacks [`US`].
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, LocationError> {
    let slice = Locations::from_config(config)?;
    info!(regions = slice.provider.list_regions(US).len(), "Locations slice initialized");
    Ok(InitializedSlice::new(slice))
}
