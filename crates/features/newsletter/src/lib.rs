//! Newsletter subscription: one email field, checked locally, posted once.
//!
//! A duplicate address (HTTP 409) is reported as "already subscribed"; the
//! field is cleared whatever the server says.

pub mod client;
mod error;
pub mod form;

pub use crate::client::{NewsletterClient, SubscriptionSink};
pub use crate::error::{NewsletterError, NewsletterErrorExt};
pub use crate::form::NewsletterForm;
use gway_domain::config::SiteConfig;
use gway_domain::registry::InitializedSlice;
use gway_kernel::http::ApiClient;

/// Newsletter feature state
#[gway_derive::gway_slice]
pub struct Newsletter {
    pub client: NewsletterClient,
}

impl Newsletter {
    #[must_use]
    pub fn form(&self) -> NewsletterForm<NewsletterClient> {
        NewsletterForm::new(self.client.clone())
    }
}

/// Initialize the newsletter feature.
///
/// # Errors
/// Fails if the API client cannot be built from `config`.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, NewsletterError> {
    let api = ApiClient::new(&config.api).context("Building newsletter API client")?;
    let client = NewsletterClient::new(api, config.api.endpoints.newsletter.as_str());

    tracing::info!("Newsletter slice initialized");

    Ok(InitializedSlice::new(Newsletter::new(NewsletterInner { client })))
}
