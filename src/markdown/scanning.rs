//! Tag scanning
//!
//!     The scanner makes a single left-to-right pass over the source and emits a flat,
//!     ordered sequence of [`Tag`]s. Its pieces live in sub-modules:
//!
//!     - markers: recognizes one construct at a time (header, list item, link, style run)
//!     - nesting: splits a style tag around the styles found inside it
//!     - paragraphs: turns the plain text between constructs into Normal and Paragraph tags
//!     - lists: tracks list indentation to compute nesting depth
//!     - sink: collects tags so that their full ranges tile the source
//!
//!     Scanning never fails. Markers that don't form a construct stay in the surrounding
//!     plain text.
//!
//!     All offsets are UTF-8 byte offsets. Markers are ASCII and an escape always consumes
//!     the whole escaped character, so every offset falls on a character boundary.

pub mod lists;
pub mod markers;
pub mod nesting;
pub mod paragraphs;
pub mod sink;

use self::lists::ListIndentation;
use self::markers::Scope;
use self::paragraphs::Segment;
use self::sink::TagSink;
use super::tag::{Tag, TagKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Knobs of the scanner, loaded from the `[scanner]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Deepest style level kept; top-level styles are level 1.
    pub max_nesting_depth: usize,
    /// Spaces of indentation per list level.
    pub list_indent_width: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_nesting_depth: 64,
            list_indent_width: 2,
        }
    }
}

/// The canonical scanner, reporting byte offsets.
#[derive(Debug, Clone, Default)]
pub struct TagScanner {
    options: ScanOptions,
}

impl TagScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScanOptions) -> Self {
        TagScanner { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `text` into its ordered tag sequence.
    pub fn find_tags(&self, text: &str) -> Vec<Tag> {
        let mut sink = TagSink::new();
        let mut lists = ListIndentation::new(self.options.list_indent_width);
        let mut cursor = 0;

        while let Some(tag) = markers::search(text, cursor, text.len(), Scope::Block) {
            if tag.start_position > cursor {
                add_paragraphed(text, cursor, tag.start_position, &mut sink, &mut lists);
            }
            cursor = tag.end_position;

            match tag.kind {
                kind if kind.is_style() => {
                    let max_depth = self.options.max_nesting_depth;
                    for piece in nesting::resolve(text, tag, 1, max_depth) {
                        sink.push(piece);
                    }
                }
                TagKind::Header => {
                    lists.reset();
                    sink.push(tag);
                }
                kind if kind.is_list() => {
                    let indent = leading_spaces(text, tag.start_position);
                    let depth = lists.depth(indent);
                    sink.push(tag.with_weight(depth));
                }
                _ => sink.push(tag),
            }
        }
        if cursor < text.len() {
            add_paragraphed(text, cursor, text.len(), &mut sink, &mut lists);
        }

        let tags = sink.finish();
        debug!(bytes = text.len(), tags = tags.len(), "scan complete");
        tags
    }
}

fn add_paragraphed(
    text: &str,
    start: usize,
    end: usize,
    sink: &mut TagSink,
    lists: &mut ListIndentation,
) {
    for segment in paragraphs::split(text, start, end) {
        match segment {
            Segment::Text(tag) => sink.push(tag),
            Segment::Break(tag) => {
                lists.reset();
                sink.push(tag);
            }
            Segment::Blank(range) => sink.cover(range.start, range.end),
        }
    }
}

fn leading_spaces(text: &str, from: usize) -> usize {
    text.as_bytes()[from..]
        .iter()
        .take_while(|&&b| b == b' ')
        .count()
}

/// Width in bytes of the unit starting at `at`, and whether it is an escape.
///
/// A backslash followed by any character other than a newline (inside `..to`) escapes
/// that character and both form one unit. Anything else is a single character.
pub(crate) fn unit_at(text: &str, at: usize, to: usize) -> (usize, bool) {
    let bytes = text.as_bytes();
    if bytes[at] == b'\\' && at + 1 < to && bytes[at + 1] != b'\n' {
        (1 + char_len(text, at + 1), true)
    } else {
        (char_len(text, at), false)
    }
}

fn char_len(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(1, char::len_utf8)
}
