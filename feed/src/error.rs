//! Error types for the feed renderer
//!
//! This module defines error types for each boundary:
//! - `ContentError`: content API (Sanity) client errors
//! - `PageError`: host page I/O errors

use std::path::PathBuf;

use thiserror::Error;

/// Content API client errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Host page errors
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to read page {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write page {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
