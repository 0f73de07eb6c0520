//! Markdown tag scanning
//!
//!     The scanner turns markdown source into a flat, ordered sequence of tags: Normal
//!     text, Paragraph breaks, Headers, TextStyle (italic/bold), AlternativeTextStyle
//!     (strikethrough), ordered and unordered list items and Links. It produces no output
//!     format of its own; renderers walk the sequence and extract text for each tag.
//!
//!     Layout:
//!
//!     - tag: the data model
//!     - scanning: the single-pass scanner
//!     - extraction: strings from tags, with escape resolution
//!     - offsets / parser: the backend interface and the byte/char offset backends
//!     - config: layered configuration
//!     - formats: serializers for inspecting a tag stream
//!     - testing: fluent assertions for tests

pub mod config;
pub mod extraction;
pub mod formats;
pub mod offsets;
pub mod parser;
pub mod scanning;
pub mod tag;
pub mod testing;

pub use extraction::{extract_between, extract_extra, BetweenMode};
pub use parser::{CharOffsetScanner, MarkdownParser, ParserKind};
pub use scanning::{ScanOptions, TagScanner};
pub use tag::{Tag, TagFlags, TagKind};

use std::borrow::Cow;

/// Scan `text` with the default scanner.
pub fn find_tags(text: &str) -> Vec<Tag> {
    TagScanner::new().find_tags(text)
}

/// Inner text of a tag found by [`find_tags`].
pub fn extract_text<'a>(text: &'a str, tag: &Tag) -> Cow<'a, str> {
    extraction::extract_text(text, tag)
}

/// Full text of a tag found by [`find_tags`], markers included.
pub fn extract_full<'a>(text: &'a str, tag: &Tag) -> Cow<'a, str> {
    extraction::extract_full(text, tag)
}
