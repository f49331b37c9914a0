//! Feed markup
//!
//! Renders post summaries to the HTML blocks appended to the posts
//! container, plus the two fallback messages. Titles and slugs are escaped
//! by maud.

use chrono::Locale;
use maud::{html, Markup};
use urlencoding::encode;

use super::date::short_date_or_default;
use crate::domain::entities::PostSummary;

/// Shown when the query returned no posts
pub fn empty_message() -> Markup {
    html! { p { "No posts found." } }
}

/// Shown when the query failed
pub fn error_message() -> Markup {
    html! { p { "Error loading posts." } }
}

/// Link to a post's detail page, e.g. `post.html?slug=hello`
pub fn detail_href(detail_page: &str, slug: &str) -> String {
    format!("{}?slug={}", detail_page, encode(slug))
}

/// Render one post summary block
pub fn post_block(post: &PostSummary, detail_page: &str, locale: Locale) -> Markup {
    let href = detail_href(detail_page, post.slug_or_default());
    let published = short_date_or_default(post.published_at(), locale);

    html! {
        div {
            h2 { a href=(href) { (post.title_or_default()) } }
            p { "Published: " (published) }
        }
    }
}
