//! Domain ports (traits)
//!
//! Port traits define interfaces that the renderer requires.
//! Adapters provide concrete implementations of these traits.

pub mod content;
pub mod page;

pub use content::ContentSource;
pub use page::{HostPage, RenderSink};
