use crate::error::ArticlesError;
use crate::model::Article;
use reqwest::Url;
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SharePlatform {
    WhatsApp,
    Facebook,
    #[strum(serialize = "X")]
    Twitter,
    LinkedIn,
}

impl SharePlatform {
    /// Share-intent URL for a page with `title` at `url`.
    pub fn link(self, title: &str, url: &str) -> Result<Url, ArticlesError> {
        let parsed = match self {
            Self::WhatsApp => Url::parse_with_params(
                "https://wa.me/",
                &[("text", format!("Check out this article: {title} {url}"))],
            ),
            Self::Facebook => {
                Url::parse_with_params("https://www.facebook.com/sharer/sharer.php", &[("u", url)])
            },
            Self::Twitter => Url::parse_with_params(
                "https://twitter.com/intent/tweet",
                &[("url", url), ("text", title)],
            ),
            Self::LinkedIn => Url::parse_with_params(
                "https://www.linkedin.com/sharing/share-offsite/",
                &[("url", url)],
            ),
        };

        parsed.map_err(|err| ArticlesError::Internal {
            message: err.to_string().into(),
            context: Some(format!("Building {self} share link").into()),
        })
    }
}

impl Article {
    /// Share links for every platform, pointing at the canonical URL.
    pub fn share_links(&self, site_origin: &str) -> Result<Vec<(SharePlatform, Url)>, ArticlesError> {
        let url = self.canonical_url(site_origin);
        SharePlatform::iter().map(|p| p.link(&self.title, &url).map(|link| (p, link))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
    }

    #[test]
    fn whatsapp_text_embeds_title_and_url() {
        let link = SharePlatform::WhatsApp.link("Tom & Jerry", "https://x.test/articles/t").expect("link");

        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(
            query(&link, "text").as_deref(),
            Some("Check out this article: Tom & Jerry https://x.test/articles/t")
        );
    }

    #[test]
    fn twitter_carries_url_and_text() {
        let link = SharePlatform::Twitter.link("Visas", "https://x.test/articles/v").expect("link");

        assert_eq!(link.path(), "/intent/tweet");
        assert_eq!(query(&link, "url").as_deref(), Some("https://x.test/articles/v"));
        assert_eq!(query(&link, "text").as_deref(), Some("Visas"));
    }

    #[test]
    fn facebook_and_linkedin_carry_only_the_url() {
        let fb = SharePlatform::Facebook.link("t", "https://x.test/a?b=c").expect("link");
        let li = SharePlatform::LinkedIn.link("t", "https://x.test/a?b=c").expect("link");

        assert_eq!(query(&fb, "u").as_deref(), Some("https://x.test/a?b=c"));
        assert_eq!(query(&li, "url").as_deref(), Some("https://x.test/a?b=c"));
        assert_eq!(li.query_pairs().count(), 1);
    }
}
