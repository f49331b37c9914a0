//! Feed render service
//!
//! One-shot fetch and render of the post listing. The fetch is awaited
//! first, then the container is looked up and written exactly once: either
//! with a fallback message or with one appended block per post.

use std::sync::Arc;

use chrono::Locale;

use crate::config::Config;
use crate::domain::ports::{ContentSource, HostPage};
use crate::render::{empty_message, error_message, post_block};

/// How a render run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// This many post blocks were appended
    Populated(usize),
    /// The query returned no posts; the empty message was written
    Empty,
    /// The fetch failed; the error message was written if the container exists
    Failed,
    /// The fetch succeeded but the page has no container
    MissingContainer,
}

/// Rendering knobs taken from [`Config`]
#[derive(Clone)]
pub struct RenderSettings {
    pub container_id: String,
    pub detail_page: String,
    pub locale: Locale,
}

impl RenderSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            container_id: config.container_id.clone(),
            detail_page: config.detail_page.clone(),
            locale: config.date_locale(),
        }
    }
}

/// Service that renders the post feed into a host page
pub struct FeedRenderService<CS>
where
    CS: ContentSource,
{
    content: Arc<CS>,
    settings: RenderSettings,
}

impl<CS> FeedRenderService<CS>
where
    CS: ContentSource,
{
    pub fn new(content: Arc<CS>, settings: RenderSettings) -> Self {
        Self { content, settings }
    }

    /// Fetch the posts and render them into `page`.
    ///
    /// Never fails: transport and payload problems are logged and shown as a
    /// message in the container.
    pub async fn render<P>(&self, page: &mut P) -> RenderOutcome
    where
        P: HostPage + ?Sized,
    {
        let id = self.settings.container_id.as_str();

        let result = match self.content.fetch_posts().await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Fetch error: {}", e);
                if let Some(container) = page.container(id) {
                    container.replace_inner(&error_message().into_string());
                }
                return RenderOutcome::Failed;
            }
        };

        tracing::debug!(
            count = result.as_ref().map(Vec::len),
            "Posts from Sanity: {:?}",
            result
        );

        let Some(container) = page.container(id) else {
            tracing::error!("Missing #{} container in HTML", id);
            return RenderOutcome::MissingContainer;
        };

        let posts = match result {
            Some(posts) if !posts.is_empty() => posts,
            _ => {
                container.replace_inner(&empty_message().into_string());
                return RenderOutcome::Empty;
            }
        };

        for post in &posts {
            let block = post_block(post, &self.settings.detail_page, self.settings.locale);
            container.append(&block.into_string());
        }

        RenderOutcome::Populated(posts.len())
    }
}
