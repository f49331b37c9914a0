//! Host page port traits
//!
//! The page that receives the feed is owned by someone else. The renderer
//! only ever sees one element of it, addressed by id, through a
//! [`RenderSink`].

/// A single element whose inner markup the renderer may write
pub trait RenderSink {
    /// Replace the element's inner markup wholesale
    fn replace_inner(&mut self, markup: &str);

    /// Append markup after the element's current children
    fn append(&mut self, markup: &str);
}

/// A page that can hand out an element by id
pub trait HostPage {
    /// Look up the element with the given id. `None` when the page has no
    /// such element.
    fn container(&mut self, id: &str) -> Option<&mut dyn RenderSink>;
}
