use gway_domain::outcome::{FormKind, SubmissionOutcome};
use gway_kernel::http::ApiClient;
use gway_kernel::notify::fallback_failure;
use serde::Serialize;
use std::future::Future;
use tracing::info;

/// Destination for subscription requests. One request per call, no retry.
pub trait SubscriptionSink: Send + Sync {
    fn subscribe(&self, email: &str) -> impl Future<Output = SubmissionOutcome> + Send;
}

#[derive(Debug, Serialize)]
struct SubscribeBody<'a> {
    email: &'a str,
}

/// [`SubscriptionSink`] backed by the site API.
#[derive(Debug, Clone)]
pub struct NewsletterClient {
    api: ApiClient,
    path: String,
}

impl NewsletterClient {
    #[must_use]
    pub fn new(api: ApiClient, path: impl Into<String>) -> Self {
        Self { api, path: path.into() }
    }
}

impl SubscriptionSink for NewsletterClient {
    async fn subscribe(&self, email: &str) -> SubmissionOutcome {
        info!(path = %self.path, "Submitting newsletter subscription");
        self.api
            .submit(&self.path, &SubscribeBody { email }, fallback_failure(FormKind::Newsletter))
            .await
    }
}
