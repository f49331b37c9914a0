//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod html_page;
pub mod sanity;

pub use html_page::HtmlPage;
pub use sanity::SanityClient;
