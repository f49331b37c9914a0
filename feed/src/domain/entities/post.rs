//! Post summary entity
//!
//! Posts live in the content API (source of truth). This entity is the
//! projection returned by the listing query: title, slug and publish time.
//! Every field is optional on the wire, so each one gets a total accessor
//! that never fails.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;

/// Slug used in detail links when a post has none
pub const FALLBACK_SLUG: &str = "no-slug";

/// Title shown when a post has none
pub const FALLBACK_TITLE: &str = "Untitled";

/// Date label shown when a post has no usable publish time
pub const FALLBACK_DATE: &str = "No date";

/// The listing query's result. `None` when the API returned `result: null`
/// or omitted the key.
pub type QueryResult = Option<Vec<PostSummary>>;

/// A slug object as stored by the CMS (`{ "_type": "slug", "current": "..." }`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Slug {
    #[serde(default)]
    pub current: Option<String>,
}

/// A post as listed on the index page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl PostSummary {
    /// The post's title, or [`FALLBACK_TITLE`]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(FALLBACK_TITLE)
    }

    /// The post's slug, or [`FALLBACK_SLUG`] when missing or empty
    pub fn slug_or_default(&self) -> &str {
        self.slug
            .as_ref()
            .and_then(|s| s.current.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_SLUG)
    }

    /// The publish time in UTC.
    ///
    /// Accepts RFC 3339 timestamps (the CMS `datetime` type) and plain
    /// `YYYY-MM-DD` dates (the CMS `date` type). Anything else is `None`.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_at.as_deref()?.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}
