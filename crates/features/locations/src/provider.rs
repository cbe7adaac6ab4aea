use crate::dataset::Dataset;
use crate::error::LocationError;
use crate::{Locality, Region, overrides};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Source of regions and their localities.
///
/// Implementors supply the two primitive lookups; the name-based helpers and
/// the territory overrides come for free.
pub trait LocationProvider: Debug + Send + Sync {
    /// All regions of `country`, ordered by name. Unknown countries yield nothing.
    fn list_regions(&self, country: &str) -> Vec<Region>;

    /// Localities of the region with `region_code`. Unknown or empty codes
    /// yield an empty list rather than an error.
    fn list_localities(&self, country: &str, region_code: &str) -> Vec<Locality>;

    fn region_by_name(&self, country: &str, name: &str) -> Option<Region> {
        self.list_regions(country).into_iter().find(|r| r.name == name)
    }

    fn region_by_code(&self, country: &str, code: &str) -> Option<Region> {
        self.list_regions(country).into_iter().find(|r| r.code == code)
    }

    /// Candidate localities for a region picked by its display name.
    ///
    /// The override table wins over the generic lookup on an exact name match.
    fn localities_for_region_name(&self, country: &str, region_name: &str) -> Vec<Locality> {
        if region_name.is_empty() {
            return Vec::new();
        }
        if let Some(cities) = overrides::lookup(country, region_name) {
            debug!(region = region_name, "Using territory override localities");
            return cities.iter().map(|name| Locality::new(*name)).collect();
        }
        self.region_by_name(country, region_name)
            .map(|region| self.list_localities(country, &region.code))
            .unwrap_or_default()
    }
}

/// Provider backed by an in-memory [`Dataset`].
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    dataset: Arc<Dataset>,
}

impl LocationCatalog {
    #[must_use]
    pub const fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Catalog over the dataset compiled into the crate.
    pub fn bundled() -> Result<Self, LocationError> {
        Dataset::bundled().map(Self::new)
    }

    /// Catalog over a dataset file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, LocationError> {
        Dataset::from_path(path).map(|dataset| Self::new(Arc::new(dataset)))
    }

    /// Checks that the dataset covers `country`.
    pub fn require_country(&self, country: &str) -> Result<(), LocationError> {
        match self.dataset.country(country) {
            Some(record) if !record.regions.is_empty() => Ok(()),
            _ => Err(LocationError::UnknownCountry {
                message: country.to_owned().into(),
                context: Some("No regions in location dataset".into()),
            }),
        }
    }
}

impl LocationProvider for LocationCatalog {
    fn list_regions(&self, country: &str) -> Vec<Region> {
        self.dataset
            .country(country)
            .map(|c| c.regions.iter().map(|r| Region::new(&r.code, &r.name)).collect())
            .unwrap_or_default()
    }

    fn list_localities(&self, country: &str, region_code: &str) -> Vec<Locality> {
        if region_code.is_empty() {
            return Vec::new();
        }
        self.dataset
            .country(country)
            .and_then(|c| c.region_by_code(region_code))
            .map(|r| r.localities.iter().map(|name| Locality::new(name.as_str())).collect())
            .unwrap_or_default()
    }

    fn region_by_name(&self, country: &str, name: &str) -> Option<Region> {
        self.dataset
            .country(country)
            .and_then(|c| c.region_by_name(name))
            .map(|r| Region::new(&r.code, &r.name))
    }
}
