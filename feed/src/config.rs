use std::env;

use chrono::Locale;

use crate::render::parse_locale;

const DEFAULT_PROJECT_ID: &str = "ltu8jl1f";
const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_HOST: &str = "api.sanity.io";
const CDN_API_HOST: &str = "apicdn.sanity.io";
const DEFAULT_API_VERSION: &str = "v1";
const DEFAULT_QUERY: &str = r#"*[_type == "post"]{title, slug, publishedAt}"#;
const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_DETAIL_PAGE: &str = "post.html";
const DEFAULT_CONTAINER_ID: &str = "posts";

#[derive(Clone, Debug)]
pub struct Config {
    /// Sanity project id (first label of the API host)
    pub project_id: String,
    pub dataset: String,
    pub api_host: String,
    pub api_version: String,
    /// Query the edge-cached API host instead of the live one
    pub use_cdn: bool,
    /// GROQ query for the post listing
    pub query: String,
    /// Locale name used for publish dates, e.g. `en_US`
    pub locale: String,
    /// Page that post links point at
    pub detail_page: String,
    /// Id of the element that receives the feed
    pub container_id: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Missing or empty
    /// variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            project_id: var("SANITY_PROJECT_ID", DEFAULT_PROJECT_ID),
            dataset: var("SANITY_DATASET", DEFAULT_DATASET),
            api_host: var("SANITY_API_HOST", DEFAULT_API_HOST),
            api_version: var("SANITY_API_VERSION", DEFAULT_API_VERSION),
            use_cdn: lookup("SANITY_USE_CDN")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            query: var("FEED_QUERY", DEFAULT_QUERY),
            locale: var("FEED_LOCALE", DEFAULT_LOCALE),
            detail_page: var("FEED_DETAIL_PAGE", DEFAULT_DETAIL_PAGE),
            container_id: var("FEED_CONTAINER_ID", DEFAULT_CONTAINER_ID),
        }
    }

    /// Base URL of the project's API, e.g. `https://ltu8jl1f.api.sanity.io`
    pub fn api_base_url(&self) -> String {
        let host = if self.use_cdn {
            CDN_API_HOST
        } else {
            self.api_host.as_str()
        };
        format!("https://{}.{}", self.project_id, host)
    }

    /// The configured date locale. Unknown names fall back to POSIX.
    pub fn date_locale(&self) -> Locale {
        parse_locale(&self.locale).unwrap_or_else(|| {
            tracing::warn!("Unknown locale {:?}, falling back to POSIX", self.locale);
            Locale::POSIX
        })
    }
}
