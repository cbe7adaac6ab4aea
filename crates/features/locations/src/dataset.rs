//! Bundled reference data, parsed once on first use.

use crate::error::{LocationError, LocationErrorExt};
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, LazyLock};

const BUNDLED_JSON: &str = include_str!("../data/regions.json");

static BUNDLED: LazyLock<Result<Arc<Dataset>, String>> =
    LazyLock::new(|| Dataset::from_json(BUNDLED_JSON).map(Arc::new).map_err(|e| e.to_string()));

#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    countries: Vec<CountryRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    pub regions: Vec<RegionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionRecord {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub localities: Vec<String>,
}

impl Dataset {
    /// Parses a dataset document; regions are kept ordered by name.
    pub fn from_json(raw: &str) -> Result<Self, LocationError> {
        let mut dataset: Self = serde_json::from_str(raw).context("Parsing location dataset")?;
        for country in &mut dataset.countries {
            country.regions.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(dataset)
    }

    /// Reads a dataset file with the same shape as the bundled one.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LocationError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LocationError::Io {
            source,
            context: Some(format!("Reading {}", path.display()).into()),
        })?;
        Self::from_json(&raw)
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> Result<Arc<Self>, LocationError> {
        BUNDLED.as_ref().map(Arc::clone).map_err(|message| LocationError::Internal {
            message: message.clone().into(),
            context: Some("Loading bundled location dataset".into()),
        })
    }

    #[must_use]
    pub fn country(&self, code: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn countries(&self) -> impl Iterator<Item = &CountryRecord> {
        self.countries.iter()
    }
}

impl CountryRecord {
    #[must_use]
    pub fn region_by_code(&self, code: &str) -> Option<&RegionRecord> {
        self.regions.iter().find(|r| r.code == code)
    }

    #[must_use]
    pub fn region_by_name(&self, name: &str) -> Option<&RegionRecord> {
        self.regions.iter().find(|r| r.name == name)
    }
}
