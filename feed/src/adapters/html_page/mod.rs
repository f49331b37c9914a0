//! HTML document adapter
//!
//! Implements [`crate::domain::ports::HostPage`] over an HTML document held
//! in memory, so the feed can be rendered into a static page on disk.

mod page;
mod tokenizer;

pub use page::HtmlPage;
