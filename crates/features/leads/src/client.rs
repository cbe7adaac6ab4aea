use crate::form::{FormVariant, LeadSubmission};
use gway_domain::config::EndpointsConfig;
use gway_domain::outcome::SubmissionOutcome;
use gway_kernel::http::ApiClient;
use gway_kernel::notify::fallback_failure;
use std::future::Future;
use tracing::info;

/// Destination for validated leads.
///
/// Exactly one request per call; implementations classify the result and
/// never retry.
pub trait LeadSink: Send + Sync {
    fn submit(
        &self,
        variant: FormVariant,
        lead: &LeadSubmission,
    ) -> impl Future<Output = SubmissionOutcome> + Send;
}

/// [`LeadSink`] backed by the site API.
#[derive(Debug, Clone)]
pub struct LeadClient {
    api: ApiClient,
    endpoints: EndpointsConfig,
}

impl LeadClient {
    #[must_use]
    pub const fn new(api: ApiClient, endpoints: EndpointsConfig) -> Self {
        Self { api, endpoints }
    }
}

impl LeadSink for LeadClient {
    async fn submit(&self, variant: FormVariant, lead: &LeadSubmission) -> SubmissionOutcome {
        let path = variant.endpoint(&self.endpoints);
        info!(form = %variant, service = %lead.legal_service, state = %lead.state, "Submitting lead");

        self.api.submit(path, lead, fallback_failure(variant.form_kind())).await
    }
}
