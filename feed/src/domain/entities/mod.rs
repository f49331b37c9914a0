//! Domain entities

pub mod post;

pub use post::{PostSummary, QueryResult, FALLBACK_DATE};
