//! Byte and character offsets
//!
//!     The scanner works in UTF-8 byte offsets. Hosts that index strings by character
//!     translate at the boundary with a [`CharIndex`] built once per text.

use super::tag::Tag;

/// Unit of the offsets a parser reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    Bytes,
    Chars,
}

/// Lookup table between byte offsets and character offsets of one text.
#[derive(Debug, Clone)]
pub struct CharIndex {
    /// Byte offset of every character start, followed by the text length. Empty for
    /// ASCII text, where both offsets coincide.
    boundaries: Vec<usize>,
    len: usize,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        let boundaries = if text.is_ascii() {
            Vec::new()
        } else {
            text.char_indices()
                .map(|(offset, _)| offset)
                .chain(std::iter::once(text.len()))
                .collect()
        };
        CharIndex {
            boundaries,
            len: text.len(),
        }
    }

    pub fn char_len(&self) -> usize {
        if self.boundaries.is_empty() {
            self.len
        } else {
            self.boundaries.len() - 1
        }
    }

    /// Character offset of a byte offset. Offsets inside a character round up to the next one.
    pub fn to_char(&self, byte: usize) -> usize {
        if self.boundaries.is_empty() {
            return byte.min(self.len);
        }
        match self.boundaries.binary_search(&byte) {
            Ok(index) | Err(index) => index.min(self.char_len()),
        }
    }

    /// Byte offset of a character offset, clamped to the text length.
    pub fn to_byte(&self, offset: usize) -> usize {
        if self.boundaries.is_empty() {
            return offset.min(self.len);
        }
        self.boundaries.get(offset).copied().unwrap_or(self.len)
    }

    pub fn tag_to_chars(&self, tag: &Tag) -> Tag {
        tag.map_offsets(|offset| self.to_char(offset))
    }

    pub fn tag_to_bytes(&self, tag: &Tag) -> Tag {
        tag.map_offsets(|offset| self.to_byte(offset))
    }
}
