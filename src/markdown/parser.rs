//! Parser interface and backends
//!
//!     [`MarkdownParser`] is the contract renderers program against: find the tags of a
//!     text and extract strings for them. Two interchangeable backends implement it:
//!
//!     - [`TagScanner`]: the canonical scanner, offsets in UTF-8 bytes
//!     - [`CharOffsetScanner`]: the same scan with offsets counted in characters, for
//!       hosts whose strings index that way
//!
//!     Both yield the same tags for the same text, up to the offset unit, and extract the
//!     same strings. Which one to use is a configuration choice ([`ParserKind`]), made by
//!     the caller.

use super::extraction::{self, BetweenMode};
use super::offsets::{CharIndex, OffsetUnit};
use super::scanning::{ScanOptions, TagScanner};
use super::tag::Tag;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

pub trait MarkdownParser: Send + Sync {
    /// Backend name, as used in configuration
    fn name(&self) -> &str;

    /// Unit of every offset in the tags this parser returns and accepts.
    fn offset_unit(&self) -> OffsetUnit;

    fn find_tags(&self, text: &str) -> Vec<Tag>;

    fn extract_text<'a>(&self, text: &'a str, tag: &Tag) -> Cow<'a, str>;

    fn extract_full<'a>(&self, text: &'a str, tag: &Tag) -> Cow<'a, str>;

    fn extract_extra<'a>(&self, text: &'a str, tag: &Tag) -> Option<Cow<'a, str>>;

    fn extract_between<'a>(
        &self,
        text: &'a str,
        from: &Tag,
        to: &Tag,
        mode: BetweenMode,
    ) -> Cow<'a, str>;
}

impl MarkdownParser for TagScanner {
    fn name(&self) -> &str {
        ParserKind::Scanner.name()
    }

    fn offset_unit(&self) -> OffsetUnit {
        OffsetUnit::Bytes
    }

    fn find_tags(&self, text: &str) -> Vec<Tag> {
        TagScanner::find_tags(self, text)
    }

    fn extract_text<'a>(&self, text: &'a str, tag: &Tag) -> Cow<'a, str> {
        extraction::extract_text(text, tag)
    }

    fn extract_full<'a>(&self, text: &'a str, tag: &Tag) -> Cow<'a, str> {
        extraction::extract_full(text, tag)
    }

    fn extract_extra<'a>(&self, text: &'a str, tag: &Tag) -> Option<Cow<'a, str>> {
        extraction::extract_extra(text, tag)
    }

    fn extract_between<'a>(
        &self,
        text: &'a str,
        from: &Tag,
        to: &Tag,
        mode: BetweenMode,
    ) -> Cow<'a, str> {
        extraction::extract_between(text, from, to, mode)
    }
}

/// Scanner reporting character offsets instead of byte offsets.
///
/// Each extraction call indexes the whole text. For many extractions over one text,
/// scan into a [`TagStream`](super::formats::TagStream), which indexes it once.
#[derive(Debug, Clone, Default)]
pub struct CharOffsetScanner {
    inner: TagScanner,
}

impl CharOffsetScanner {
    pub fn new(options: ScanOptions) -> Self {
        CharOffsetScanner {
            inner: TagScanner::with_options(options),
        }
    }

    fn to_bytes(text: &str, tag: &Tag) -> Tag {
        CharIndex::new(text).tag_to_bytes(tag)
    }
}

impl MarkdownParser for CharOffsetScanner {
    fn name(&self) -> &str {
        ParserKind::CharOffsets.name()
    }

    fn offset_unit(&self) -> OffsetUnit {
        OffsetUnit::Chars
    }

    fn find_tags(&self, text: &str) -> Vec<Tag> {
        let index = CharIndex::new(text);
        self.inner
            .find_tags(text)
            .iter()
            .map(|tag| index.tag_to_chars(tag))
            .collect()
    }

    fn extract_text<'a>(&self, text: &'a str, tag: &Tag) -> Cow<'a, str> {
        extraction::extract_text(text, &Self::to_bytes(text, tag))
    }

    fn extract_full<'a>(&self, text: &'a str, tag: &Tag) -> Cow<'a, str> {
        extraction::extract_full(text, &Self::to_bytes(text, tag))
    }

    fn extract_extra<'a>(&self, text: &'a str, tag: &Tag) -> Option<Cow<'a, str>> {
        extraction::extract_extra(text, &Self::to_bytes(text, tag))
    }

    fn extract_between<'a>(
        &self,
        text: &'a str,
        from: &Tag,
        to: &Tag,
        mode: BetweenMode,
    ) -> Cow<'a, str> {
        let index = CharIndex::new(text);
        let from = index.tag_to_bytes(from);
        let to = index.tag_to_bytes(to);
        extraction::extract_between(text, &from, &to, mode)
    }
}

/// Available parser backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParserKind {
    /// Byte offsets (default)
    #[default]
    Scanner,
    /// Character offsets
    CharOffsets,
}

impl ParserKind {
    pub const ALL: [ParserKind; 2] = [ParserKind::Scanner, ParserKind::CharOffsets];

    pub fn name(&self) -> &'static str {
        match self {
            ParserKind::Scanner => "scanner",
            ParserKind::CharOffsets => "char-offsets",
        }
    }

    pub fn from_name(name: &str) -> Option<ParserKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Instantiate the backend.
    pub fn build(&self, options: ScanOptions) -> Box<dyn MarkdownParser> {
        match self {
            ParserKind::Scanner => Box::new(TagScanner::with_options(options)),
            ParserKind::CharOffsets => Box::new(CharOffsetScanner::new(options)),
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
