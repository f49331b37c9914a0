//! Minimal HTML tag scanner
//!
//! Yields start and end tags in document order. Comments, doctype and
//! processing instructions are skipped, quoted attribute values are read
//! whole, and the content of raw text elements is never parsed as markup.

/// Elements whose content is raw text up to the matching end tag
const RAW_TEXT: &[&str] = &["script", "style", "textarea", "title"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<'a> {
    Start {
        /// Lowercased tag name
        name: String,
        /// Raw value of the `id` attribute, if any
        id: Option<&'a str>,
        self_closing: bool,
        end: usize,
    },
    End {
        name: String,
        start: usize,
    },
}

pub struct Tokenizer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    /// ASCII-lowercased copy of `source`; byte offsets line up
    lower: String,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            lower: source.to_ascii_lowercase(),
            pos: 0,
        }
    }

    fn skip_past(&mut self, needle: &str) {
        self.pos = match self.source[self.pos..].find(needle) {
            Some(i) => self.pos + i + needle.len(),
            None => self.bytes.len(),
        };
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn read_name(&mut self) -> String {
        let start = self.pos;
        while self.pos < self.bytes.len() && is_name_byte(self.bytes[self.pos]) {
            self.pos += 1;
        }
        self.lower[start..self.pos].to_string()
    }

    /// Reads attributes up to and including the closing `>`.
    /// Returns the `id` value and whether the tag ended in `/>`.
    fn read_attributes(&mut self) -> (Option<&'a str>, bool) {
        let source = self.source;
        let mut id = None;

        loop {
            self.skip_whitespace();
            match self.bytes.get(self.pos).copied() {
                None => return (id, false),
                Some(b'>') => {
                    self.pos += 1;
                    return (id, false);
                }
                Some(b'/') if self.bytes.get(self.pos + 1) == Some(&b'>') => {
                    self.pos += 2;
                    return (id, true);
                }
                Some(b'/') => {
                    self.pos += 1;
                    continue;
                }
                Some(_) => {}
            }

            let name_start = self.pos;
            while self.pos < self.bytes.len()
                && !matches!(self.bytes[self.pos], b'=' | b'>' | b'/')
                && !self.bytes[self.pos].is_ascii_whitespace()
            {
                self.pos += 1;
            }
            let name = &source[name_start..self.pos];
            // stray `=` with no name before it
            if name.is_empty() {
                self.pos += 1;
                continue;
            }

            self.skip_whitespace();
            if self.bytes.get(self.pos) != Some(&b'=') {
                continue;
            }
            self.pos += 1;
            self.skip_whitespace();

            let value = self.read_value();
            if id.is_none() && name.eq_ignore_ascii_case("id") {
                id = Some(value);
            }
        }
    }

    fn read_value(&mut self) -> &'a str {
        let source = self.source;
        match self.bytes.get(self.pos) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let start = self.pos + 1;
                let end = source[start..]
                    .find(quote as char)
                    .map_or(self.bytes.len(), |i| start + i);
                self.pos = (end + 1).min(self.bytes.len());
                &source[start..end]
            }
            _ => {
                let start = self.pos;
                while self.pos < self.bytes.len()
                    && self.bytes[self.pos] != b'>'
                    && !self.bytes[self.pos].is_ascii_whitespace()
                {
                    self.pos += 1;
                }
                &source[start..self.pos]
            }
        }
    }

    /// Move to the end tag that closes a raw text element
    fn skip_raw_text(&mut self, name: &str) {
        let needle = format!("</{}", name);
        let mut from = self.pos;
        while let Some(i) = self.lower[from..].find(&needle) {
            let at = from + i;
            let next = self.bytes.get(at + needle.len()).copied();
            if next.map_or(true, |b| b == b'>' || b == b'/' || b.is_ascii_whitespace()) {
                self.pos = at;
                return;
            }
            from = at + needle.len();
        }
        self.pos = self.bytes.len();
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        loop {
            let source = self.source;
            let start = self.pos + source[self.pos..].find('<')?;
            let rest = &source[start..];
            self.pos = start + 1;

            if rest.starts_with("<!--") {
                self.pos = start + 4;
                self.skip_past("-->");
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_past(">");
            } else if rest.starts_with("</") {
                if !self.bytes.get(start + 2).is_some_and(u8::is_ascii_alphabetic) {
                    continue;
                }
                self.pos = start + 2;
                let name = self.read_name();
                self.skip_past(">");
                return Some(Tag::End { name, start });
            } else if self.bytes.get(start + 1).is_some_and(u8::is_ascii_alphabetic) {
                let name = self.read_name();
                let (id, self_closing) = self.read_attributes();
                let end = self.pos;
                if !self_closing && RAW_TEXT.contains(&name.as_str()) {
                    self.skip_raw_text(&name);
                }
                return Some(Tag::Start {
                    name,
                    id,
                    self_closing,
                    end,
                });
            }
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':' || b == b'_'
}
