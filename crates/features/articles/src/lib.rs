//! # Articles
//!
//! Read-only data layer over the remote articles API: the fully drained
//! published listing, lookups by id and by slug, and the helpers the listing
//! and detail pages need (decoded body, excerpt, reading time, dates, share
//! links).
//!
//! The API's author field has drifted between an object and a flat
//! `authorName`; [`model`] normalizes both into one [`Author`].

pub mod client;
pub mod content;
mod error;
pub mod model;
pub mod share;

pub use crate::client::ArticlesClient;
pub use crate::error::{ArticlesError, ArticlesErrorExt};
pub use crate::model::{Article, ArticlePage, ArticleStatus, Author};
pub use crate::share::SharePlatform;
use gway_domain::config::SiteConfig;
use gway_domain::registry::InitializedSlice;
use gway_kernel::http::ApiClient;

/// Articles feature state.
#[gway_derive::gway_slice]
pub struct Articles {
    pub client: ArticlesClient,
    /// Public site origin used for canonical and share URLs.
    pub site_origin: String,
}

impl Articles {
    #[must_use]
    pub fn canonical_url(&self, article: &Article) -> String {
        article.canonical_url(&self.site_origin)
    }
}

/// Initialize the articles feature.
///
/// # Errors
/// Fails if the API client cannot be built from `config`.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, ArticlesError> {
    let api = ApiClient::new(&config.api).map_err(ArticlesError::from)?;
    let client = ArticlesClient::new(api, config.api.page_size);

    tracing::info!(page_size = config.api.page_size, "Articles slice initialized");

    Ok(InitializedSlice::new(Articles::new(ArticlesInner {
        client,
        site_origin: config.site.origin().to_owned(),
    })))
}
