//! Text extraction
//!
//!     Tags only hold offsets; these functions turn them back into strings. When a tag
//!     is flagged ESCAPED, every backslash that precedes a character other than a newline
//!     is dropped in a single pass over the requested range. Otherwise the result borrows
//!     from the source.

use super::tag::Tag;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::Range;

/// Inner content of a tag, markers excluded.
pub fn extract_text<'a>(text: &'a str, tag: &Tag) -> Cow<'a, str> {
    substring(text, tag.text_range(), tag.is_escaped())
}

/// Full span of a tag, markers included.
pub fn extract_full<'a>(text: &'a str, tag: &Tag) -> Cow<'a, str> {
    substring(text, tag.full_range(), tag.is_escaped())
}

/// The auxiliary payload of a link (its url).
pub fn extract_extra<'a>(text: &'a str, tag: &Tag) -> Option<Cow<'a, str>> {
    let extra = tag.extra.clone()?;
    Some(substring(text, extra, tag.is_escaped()))
}

/// Which boundaries of two tags delimit the text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BetweenMode {
    /// From the start of `from`'s text to the start of `to`.
    StartToNext,
    /// From the end of `from` to the start of `to`.
    IntermediateToNext,
    /// From the end of `from` to the end of `to`'s text.
    IntermediateToEnd,
}

/// Text spanning two tags, e.g. a list item's text followed by its nested content.
///
/// A reversed range yields an empty string.
pub fn extract_between<'a>(text: &'a str, from: &Tag, to: &Tag, mode: BetweenMode) -> Cow<'a, str> {
    let range = match mode {
        BetweenMode::StartToNext => from.start_text..to.start_position,
        BetweenMode::IntermediateToNext => from.end_position..to.start_position,
        BetweenMode::IntermediateToEnd => from.end_position..to.end_text,
    };
    substring(text, range, from.is_escaped() || to.is_escaped())
}

fn substring(text: &str, range: Range<usize>, escaped: bool) -> Cow<'_, str> {
    let end = range.end.min(text.len());
    let start = range.start.min(end);
    let slice = text.get(start..end).unwrap_or_default();
    if escaped {
        unescape(slice)
    } else {
        Cow::Borrowed(slice)
    }
}

/// Resolve backslash escapes: `\x` becomes `x` for any `x` but a newline.
///
/// A trailing backslash, or one before a newline, is kept.
pub fn unescape(source: &str) -> Cow<'_, str> {
    if !source.contains('\\') {
        return Cow::Borrowed(source);
    }
    let mut result = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next != '\n' {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    Cow::Owned(result)
}
