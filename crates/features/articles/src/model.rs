//! Canonical article shape and the adapter from the API's wire shapes.
//!
//! Across revisions the API has sent the author either as an object or as a
//! flat `authorName` string. Both are folded into [`Author`] during
//! deserialization, so nothing past this module sees the difference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_email_verified: bool,
}

impl Author {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), role: None, email: None, is_email_verified: false }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::named(ANONYMOUS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArticleStatus {
    Published,
    Draft,
    Archived,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawArticle")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// HTML body as sent by the API, entity-escaped.
    pub description: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ArticleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// One page of the published listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    #[serde(default)]
    pub results: Vec<Article>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl ArticlePage {
    /// Page count to drain; a missing or zero count means one page.
    #[must_use]
    pub fn effective_total_pages(&self) -> u32 {
        self.total_pages.max(1)
    }
}

// --- Wire shapes ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(alias = "_id")]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    author: Option<RawAuthor>,
    #[serde(default)]
    author_name: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    status: ArticleStatus,
    #[serde(default)]
    file_path: Option<String>,
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAuthor {
    Profile(RawProfile),
    Name(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    is_email_verified: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Object author wins, then a flat name, then [`ANONYMOUS`].
fn normalize_author(author: Option<RawAuthor>, author_name: Option<String>) -> Author {
    match author {
        Some(RawAuthor::Profile(profile)) => match non_blank(profile.name) {
            Some(name) => Author {
                name,
                role: non_blank(profile.role),
                email: non_blank(profile.email),
                is_email_verified: profile.is_email_verified,
            },
            None => non_blank(author_name).map_or_else(Author::anonymous, Author::named),
        },
        Some(RawAuthor::Name(name)) => non_blank(Some(name))
            .or_else(|| non_blank(author_name))
            .map_or_else(Author::anonymous, Author::named),
        None => non_blank(author_name).map_or_else(Author::anonymous, Author::named),
    }
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            author: normalize_author(raw.author, raw.author_name),
            updated_at: raw.updated_at.unwrap_or(raw.created_at),
            id: raw.id,
            title: raw.title,
            subtitle: non_blank(raw.subtitle),
            description: raw.description,
            created_at: raw.created_at,
            status: raw.status,
            file_path: non_blank(raw.file_path),
            slug: non_blank(raw.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(extra: serde_json::Value) -> Article {
        let mut doc = json!({
            "id": "a1",
            "title": "Green cards",
            "description": "&lt;p&gt;Hello&lt;/p&gt;",
            "createdAt": "2024-01-05T15:30:00Z",
            "updatedAt": "2024-01-06T09:00:00Z",
            "status": "published"
        });
        if let (Some(base), Some(extra)) = (doc.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(doc).expect("article")
    }

    #[test]
    fn author_object_wins_over_flat_name() {
        let a = article(json!({
            "author": { "name": "Ana Ruiz", "role": "editor", "email": "ana@x.com", "isEmailVerified": true },
            "authorName": "Someone Else"
        }));
        assert_eq!(a.author.name, "Ana Ruiz");
        assert_eq!(a.author.role.as_deref(), Some("editor"));
        assert!(a.author.is_email_verified);
    }

    #[test]
    fn flat_author_name_is_adapted() {
        let a = article(json!({ "authorName": "Li Wei" }));
        assert_eq!(a.author, Author::named("Li Wei"));
    }

    #[test]
    fn string_author_is_adapted() {
        let a = article(json!({ "author": "Sam Park" }));
        assert_eq!(a.author.name, "Sam Park");
    }

    #[test]
    fn missing_author_is_anonymous() {
        assert_eq!(article(json!({})).author.name, ANONYMOUS);
        assert_eq!(article(json!({ "author": { "role": "guest" }, "authorName": " " })).author.name, ANONYMOUS);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let a: Article = serde_json::from_value(json!({
            "_id": "m1",
            "createdAt": "2024-03-01T00:00:00Z",
            "status": "scheduled",
            "slug": ""
        }))
        .expect("article");

        assert_eq!(a.id, "m1");
        assert_eq!(a.updated_at, a.created_at);
        assert_eq!(a.status, ArticleStatus::Unknown);
        assert_eq!(a.slug, None);
    }

    #[test]
    fn canonical_shape_deserializes_back() {
        let a = article(json!({ "authorName": "Li Wei", "slug": "green-cards" }));
        let json = serde_json::to_value(&a).expect("serialize");

        assert_eq!(json["author"]["name"], "Li Wei");
        assert!(json.get("authorName").is_none());
        assert_eq!(serde_json::from_value::<Article>(json).expect("reparse"), a);
    }

    #[test]
    fn zero_total_pages_counts_as_one() {
        let page: ArticlePage = serde_json::from_value(json!({ "results": [] })).expect("page");
        assert_eq!(page.effective_total_pages(), 1);
    }
}
