//! Locale-aware short dates

use chrono::{DateTime, Locale, Utc};

use crate::domain::entities::FALLBACK_DATE;

/// Resolve a locale name such as `en_US` or `de_DE.UTF-8`.
///
/// The codeset suffix is ignored. Unknown names resolve to `None`.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let name = name.split('.').next().unwrap_or_default().trim();
    Locale::try_from(name).ok()
}

/// Format a date with the locale's short date format (`%x`), or return
/// [`FALLBACK_DATE`] when there is no date.
pub fn short_date_or_default(date: Option<DateTime<Utc>>, locale: Locale) -> String {
    match date {
        Some(date) => date.format_localized("%x", locale).to_string(),
        None => FALLBACK_DATE.to_string(),
    }
}
