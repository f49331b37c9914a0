//! Sanity query API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{PostSummary, QueryResult};
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

/// Reads the post listing from a public Sanity dataset.
///
/// The query is fixed at construction time; every call to
/// [`ContentSource::fetch_posts`] issues the same unauthenticated GET.
pub struct SanityClient {
    http: Client,
    query_url: String,
}

impl SanityClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(
            &config.api_base_url(),
            &config.api_version,
            &config.dataset,
            &config.query,
        )
    }

    /// Create a client against an explicit API base URL
    pub fn with_base_url(base_url: &str, api_version: &str, dataset: &str, query: &str) -> Self {
        let query_url = format!(
            "{}/{}/data/query/{}?query={}",
            base_url.trim_end_matches('/'),
            api_version,
            dataset,
            encode(query)
        );

        Self {
            http: Client::new(),
            query_url,
        }
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<QueryResult, ContentError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            decode_result(&body)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ContentError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn fetch_posts(&self) -> Result<QueryResult, ContentError> {
        tracing::debug!("GET {}", self.query_url);

        let response = self.http.get(&self.query_url).send().await?;
        self.handle_response(response).await
    }
}

/// Query API response envelope. `ms` and `query` are ignored.
#[derive(Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    result: Option<Vec<serde_json::Value>>,
}

/// Decode a query response body.
///
/// A body that is not the JSON envelope is an error. Inside the envelope,
/// items that don't decode as a post are skipped with a warning so one bad
/// document can't blank the whole feed.
fn decode_result(body: &str) -> Result<QueryResult, ContentError> {
    let envelope: QueryEnvelope =
        serde_json::from_str(body).map_err(|e| ContentError::Deserialization(e.to_string()))?;

    Ok(envelope.result.map(|items| {
        items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value::<PostSummary>(item) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!("Skipping malformed post at index {}: {}", i, e);
                    None
                }
            })
            .collect()
    }))
}
