//! Presentation helpers for article bodies and dates.
//!
//! Dates render in UTC with US English month names.

use crate::model::Article;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub const WORDS_PER_MINUTE: usize = 200;
pub const EXCERPT_CHARS: usize = 200;

static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

const ENTITIES: &[(&str, char)] =
    &[("&lt;", '<'), ("&gt;", '>'), ("&amp;", '&'), ("&quot;", '"'), ("&#39;", '\'')];

/// Unescapes the five HTML entities the API escapes, in a single pass.
#[must_use]
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            },
            None => {
                out.push('&');
                rest = &rest[1..];
            },
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Removes markup tags, leaving the text between them.
#[must_use]
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    TAG.as_ref().map_or(Cow::Borrowed(html), |re| re.replace_all(html, " "))
}

/// Plain text of an escaped HTML body, whitespace collapsed.
#[must_use]
pub fn plain_text(escaped_html: &str) -> String {
    let decoded = decode_entities(escaped_html);
    strip_tags(&decoded).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// At most `max_chars` characters of `text`, cut on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    text.char_indices().nth(max_chars).map_or(text, |(idx, _)| text[..idx].trim_end())
}

/// Minutes to read `text` at [`WORDS_PER_MINUTE`], never less than one.
#[must_use]
pub fn reading_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_MINUTE).max(1)
}

/// "January 5, 2024"
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// "Jan 5, 2024"
#[must_use]
pub fn format_short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// "Jan 5, 2024, 03:30 PM"
#[must_use]
pub fn format_date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

impl Article {
    /// Body with entities unescaped, ready to render as HTML.
    #[must_use]
    pub fn decoded_description(&self) -> Cow<'_, str> {
        decode_entities(&self.description)
    }

    /// Leading plain text of the body, for cards and meta descriptions.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        truncate_chars(&plain_text(&self.description), max_chars).to_owned()
    }

    #[must_use]
    pub fn reading_time(&self) -> String {
        format!("{} min read", reading_minutes(&plain_text(&self.description)))
    }

    /// Slug when present, else the id.
    #[must_use]
    pub fn route_key(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.id)
    }

    /// Public URL of the article page under `site_origin`.
    #[must_use]
    pub fn canonical_url(&self, site_origin: &str) -> String {
        format!("{}/articles/{}", site_origin.trim_end_matches('/'), self.route_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_each_entity_once() {
        assert_eq!(decode_entities("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"), "<b>Tom & Jerry</b>");
        assert_eq!(decode_entities("&quot;hi&quot; &#39;there&#39;"), "\"hi\" 'there'");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("AT&T &copy;"), "AT&T &copy;");
        assert!(matches!(decode_entities("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn plain_text_strips_markup() {
        assert_eq!(plain_text("&lt;p&gt;Hello&lt;/p&gt;&lt;p&gt;world&lt;/p&gt;"), "Hello world");
        assert_eq!(plain_text("<h1>Title</h1>\n\n<p>Body  text</p>"), "Title Body text");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 200), "short");
        assert_eq!(truncate_chars("ab cd", 3), "ab");
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&"word ".repeat(200)), 1);
        assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
    }

    #[test]
    fn dates_render_in_us_english() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 15, 30, 0).single().expect("valid date");

        assert_eq!(format_date(&at), "January 5, 2024");
        assert_eq!(format_short_date(&at), "Jan 5, 2024");
        assert_eq!(format_date_time(&at), "Jan 5, 2024, 03:30 PM");
    }
}
