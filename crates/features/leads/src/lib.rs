//! # Leads
//!
//! The two lead-capture forms of the site: the attorney application modal and
//! the footer contact form. Each is driven by a [`LeadFormController`] that
//! owns the typed draft, validates it with a pure [`Schema`], cascades a region
//! pick into locality suggestions and hands validated leads to a [`LeadSink`].
//!
//! Validation is deferred until the first submit attempt; after that each edit
//! re-checks only the field it touched. Whatever the outcome of the request,
//! the draft is discarded once it returns.

pub mod client;
pub mod controller;
mod error;
pub mod form;
pub mod phone;
pub mod validation;

pub use crate::client::{LeadClient, LeadSink};
pub use crate::controller::{FormPhase, LeadFormController, PendingSubmission};
pub use crate::error::{LeadError, LeadErrorExt};
pub use crate::form::{FormVariant, LeadField, LeadFormState, LeadSubmission};
pub use crate::validation::{Schema, ValidationErrors};
use gway_domain::config::SiteConfig;
use gway_domain::registry::InitializedSlice;
use gway_kernel::http::ApiClient;
use gway_locations::LocationProvider;
use std::sync::Arc;

/// Leads feature state.
#[gway_derive::gway_slice]
pub struct Leads {
    pub client: LeadClient,
}

impl Leads {
    /// Fresh controller for `variant` posting through the slice's client.
    #[must_use]
    pub fn form(
        &self,
        variant: FormVariant,
        locations: Arc<dyn LocationProvider>,
    ) -> LeadFormController<LeadClient> {
        LeadFormController::new(variant, locations, self.client.clone())
    }
}

/// Initialize the leads feature.
///
/// # Errors
/// Fails if the API client cannot be built from `config`.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, LeadError> {
    let api = ApiClient::new(&config.api).context("Building leads API client")?;
    let client = LeadClient::new(api, config.api.endpoints.clone());

    tracing::info!(
        attorney = %config.api.endpoints.attorney_application,
        contact = %config.api.endpoints.contact,
        "Leads slice initialized"
    );

    Ok(InitializedSlice::new(Leads::new(LeadsInner { client })))
}
