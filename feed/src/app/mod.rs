//! Application layer
//!
//! Contains the feed rendering use case.
//! The service coordinates the content port, the page port and the markup.

pub mod feed_render_service;

pub use feed_render_service::{FeedRenderService, RenderOutcome, RenderSettings};
