use std::path::Path;

use super::tokenizer::{Tag, Tokenizer};

use crate::domain::ports::{HostPage, RenderSink};
use crate::error::PageError;

/// An HTML document with at most one addressable container.
///
/// The document is kept as source text. Looking up a container records the
/// byte range of its inner markup; writes go to a buffer that is spliced
/// back in by [`HtmlPage::to_html`]. Everything outside the container is
/// preserved byte for byte.
pub struct HtmlPage {
    source: String,
    slot: Option<ContainerSlot>,
}

/// The inner markup of one element, addressed by id
struct ContainerSlot {
    id: String,
    inner_start: usize,
    inner_end: usize,
    inner: String,
}

impl RenderSink for ContainerSlot {
    fn replace_inner(&mut self, markup: &str) {
        self.inner = markup.to_string();
    }

    fn append(&mut self, markup: &str) {
        self.inner.push_str(markup);
    }
}

impl HtmlPage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            slot: None,
        }
    }

    pub async fn load(path: &Path) -> Result<Self, PageError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PageError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(source))
    }

    pub async fn save(&self, path: &Path) -> Result<(), PageError> {
        tokio::fs::write(path, self.to_html())
            .await
            .map_err(|source| PageError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// The document with any container writes applied
    pub fn to_html(&self) -> String {
        match &self.slot {
            Some(slot) => format!(
                "{}{}{}",
                &self.source[..slot.inner_start],
                slot.inner,
                &self.source[slot.inner_end..]
            ),
            None => self.source.clone(),
        }
    }

    /// Fold pending container writes into the source
    fn flush(&mut self) {
        if self.slot.is_some() {
            self.source = self.to_html();
            self.slot = None;
        }
    }
}

impl HostPage for HtmlPage {
    fn container(&mut self, id: &str) -> Option<&mut dyn RenderSink> {
        let cached = matches!(&self.slot, Some(slot) if slot.id == id);
        if !cached {
            self.flush();
            self.slot = locate(&self.source, id);
        }
        self.slot.as_mut().map(|slot| slot as &mut dyn RenderSink)
    }
}

/// Void elements never have content
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Find the element whose `id` attribute is `id` and the range of its
/// inner markup. Nested elements with the same tag name are balanced.
fn locate(source: &str, id: &str) -> Option<ContainerSlot> {
    let mut tags = Tokenizer::new(source);

    let (tag, inner_start, self_closing) = tags.find_map(|tag| match tag {
        Tag::Start {
            name,
            id: Some(value),
            self_closing,
            end,
        } if value == id => Some((name, end, self_closing)),
        _ => None,
    })?;

    if self_closing || VOID_ELEMENTS.contains(&tag.as_str()) {
        tracing::warn!("Element #{} (<{}>) can't hold content", id, tag);
        return None;
    }

    let mut depth = 1usize;
    for next in tags {
        match next {
            Tag::Start {
                name,
                self_closing: false,
                ..
            } if name == tag => depth += 1,
            Tag::End { name, start } if name == tag => {
                depth -= 1;
                if depth == 0 {
                    return Some(ContainerSlot {
                        id: id.to_string(),
                        inner_start,
                        inner_end: start,
                        inner: source[inner_start..start].to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    tracing::warn!("Element #{} (<{}>) is never closed", id, tag);
    None
}
