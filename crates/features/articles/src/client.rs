use crate::error::ArticlesError;
use crate::model::{Article, ArticlePage};
use gway_kernel::http::ApiClient;
use tracing::{debug, info};

const PUBLISHED_SORT: &str = "createdAt:desc";

/// Read-only client for the articles endpoints.
#[derive(Debug, Clone)]
pub struct ArticlesClient {
    api: ApiClient,
    page_size: u32,
}

impl ArticlesClient {
    #[must_use]
    pub fn new(api: ApiClient, page_size: u32) -> Self {
        Self { api, page_size: page_size.max(1) }
    }

    /// One page of the published listing, newest first.
    pub async fn published_page(&self, page: u32) -> Result<ArticlePage, ArticlesError> {
        let query = [
            ("sortBy", PUBLISHED_SORT.to_owned()),
            ("page", page.to_string()),
            ("limit", self.page_size.to_string()),
        ];
        Ok(self.api.get_json("/articles/published", &query).await?)
    }

    /// Every published article, draining the listing page by page.
    ///
    /// Stops once the page counter passes the server's `totalPages`; any page
    /// failure aborts the whole listing.
    pub async fn published(&self) -> Result<Vec<Article>, ArticlesError> {
        let mut articles = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.published_page(page).await?;
            let total_pages = batch.effective_total_pages();
            debug!(page, total_pages, count = batch.results.len(), "Fetched published articles page");

            articles.extend(batch.results);
            page += 1;
            if page > total_pages {
                break;
            }
        }

        info!(count = articles.len(), "Loaded published articles");
        Ok(articles)
    }

    pub async fn by_id(&self, id: &str) -> Result<Article, ArticlesError> {
        let id = checked_key(id)?;
        Ok(self.api.get_json(&format!("/articles/{id}"), &[]).await?)
    }

    pub async fn published_by_slug(&self, slug: &str) -> Result<Article, ArticlesError> {
        let slug = checked_key(slug)?;
        Ok(self.api.get_json(&format!("/articles/published/{slug}"), &[]).await?)
    }
}

/// Rejects keys that would escape their path segment.
fn checked_key(key: &str) -> Result<&str, ArticlesError> {
    let key = key.trim();
    if key.is_empty() || key.contains(['/', '?', '#']) || key == "." || key == ".." {
        return Err(ArticlesError::InvalidKey {
            message: format!("'{key}'").into(),
            context: Some("Article id or slug".into()),
        });
    }
    Ok(key)
}
