//! Render module
//!
//! Turns post summaries into HTML blocks and locale-formatted dates.

pub mod date;
pub mod markup;

pub use date::parse_locale;
pub use markup::{empty_message, error_message, post_block};
