//! Content source port trait
//!
//! Defines the interface for reading posts from the headless CMS.

use async_trait::async_trait;

use crate::domain::entities::QueryResult;
use crate::error::ContentError;

/// Port trait for the post listing query
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run the listing query once.
    ///
    /// Items come back in the order the server returned them.
    async fn fetch_posts(&self) -> Result<QueryResult, ContentError>;
}
