//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Locale;

use crate::app::RenderSettings;
use crate::domain::entities::post::{PostSummary, Slug};

/// Create a post with every field set
pub fn test_post(title: &str, slug: &str, published_at: &str) -> PostSummary {
    PostSummary {
        title: Some(title.to_string()),
        slug: Some(Slug {
            current: Some(slug.to_string()),
        }),
        published_at: Some(published_at.to_string()),
    }
}

/// Create a post with no title
pub fn untitled_post() -> PostSummary {
    PostSummary {
        title: None,
        slug: Some(Slug {
            current: Some("untitled".to_string()),
        }),
        published_at: Some("2024-03-01T12:00:00Z".to_string()),
    }
}

/// Create `n` distinct posts, newest first
pub fn test_posts(n: usize) -> Vec<PostSummary> {
    (0..n)
        .map(|i| {
            test_post(
                &format!("Post {}", i + 1),
                &format!("post-{}", i + 1),
                &format!("2024-01-{:02}T09:00:00Z", 28 - (i % 28)),
            )
        })
        .collect()
}

/// Render settings matching the default config, with a POSIX locale so
/// dates are stable
pub fn test_settings() -> RenderSettings {
    RenderSettings {
        container_id: "posts".to_string(),
        detail_page: "post.html".to_string(),
        locale: Locale::POSIX,
    }
}
