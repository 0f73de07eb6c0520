//! Marker matching
//!
//!     Each matcher looks at one candidate position and either returns the complete tag
//!     or `None`, in which case the caller keeps the characters as plain text.
//!
//!     Block scope (the top-level pass) recognizes, at the start of a line after optional
//!     spaces:
//!         `#`..`######` followed by content         Header, weight = level
//!         `*`, `-` or `+` and a space               UnorderedList
//!         digits, `.` and a space                   OrderedList
//!     and anywhere:
//!         runs of `*`, `_` (strength 1-3)           TextStyle
//!         `~~`                                      AlternativeTextStyle
//!         `[text](url)`                             Link
//!
//!     Inline scope (inside a style tag) only recognizes the anywhere-constructs.

use super::unit_at;
use crate::markdown::tag::{Tag, TagFlags, TagKind};
use tracing::trace;

const MAX_HEADER_LEVEL: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Block,
    Inline,
}

/// Find the first construct starting in `from..to`.
pub fn search(text: &str, from: usize, to: usize, scope: Scope) -> Option<Tag> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < to {
        if scope == Scope::Block && (i == 0 || bytes[i - 1] == b'\n') {
            let marker = skip_spaces(bytes, i, to);
            if let Some(tag) = header(text, i, marker, to).or_else(|| list_item(text, i, marker, to))
            {
                return Some(tag);
            }
            if marker > i {
                i = marker;
                continue;
            }
        }

        match bytes[i] {
            b'*' | b'_' | b'~' => {
                if let Some(tag) = text_style(text, i, to) {
                    return Some(tag);
                }
                i += run_length(bytes, i, to);
            }
            b'[' => {
                if let Some(tag) = link(text, i, to) {
                    return Some(tag);
                }
                i += 1;
            }
            _ => i += unit_at(text, i, to).0,
        }
    }
    None
}

fn skip_spaces(bytes: &[u8], mut i: usize, to: usize) -> usize {
    while i < to && bytes[i] == b' ' {
        i += 1;
    }
    i
}

fn run_length(bytes: &[u8], at: usize, to: usize) -> usize {
    bytes[at..to].iter().take_while(|&&b| b == bytes[at]).count()
}

/// Scan to the end of the line, returning its position and whether escapes were seen.
fn line_end(text: &str, mut i: usize, to: usize) -> (usize, bool) {
    let bytes = text.as_bytes();
    let mut escaped = false;
    while i < to && bytes[i] != b'\n' {
        let (width, is_escape) = unit_at(text, i, to);
        escaped |= is_escape;
        i += width;
    }
    (i, escaped)
}

/// A line-start construct: full range from the line start through its newline.
fn line_tag(kind: TagKind, line_start: usize, start_text: usize, text: &str, to: usize) -> Tag {
    let (end_text, escaped) = line_end(text, start_text, to);
    let end_position = if end_text < to { end_text + 1 } else { end_text };
    let flags = if escaped {
        TagFlags::ESCAPED
    } else {
        TagFlags::empty()
    };
    Tag::new(kind, line_start..end_position, start_text..end_text).with_flags(flags)
}

pub fn header(text: &str, line_start: usize, marker: usize, to: usize) -> Option<Tag> {
    let bytes = text.as_bytes();
    let mut i = marker;
    let mut level = 0;
    while i < to && bytes[i] == b'#' && level < MAX_HEADER_LEVEL {
        level += 1;
        i += 1;
    }
    if level == 0 {
        return None;
    }
    i = skip_spaces(bytes, i, to);
    if i >= to || bytes[i] == b'\n' {
        trace!(position = line_start, "header without content");
        return None;
    }
    Some(line_tag(TagKind::Header, line_start, i, text, to).with_weight(level))
}

pub fn list_item(text: &str, line_start: usize, marker: usize, to: usize) -> Option<Tag> {
    let bytes = text.as_bytes();
    if marker >= to {
        return None;
    }
    let (kind, after) = match bytes[marker] {
        b'*' | b'-' | b'+' => (TagKind::UnorderedList, marker + 1),
        b'0'..=b'9' => {
            let digits = bytes[marker..to]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            let dot = marker + digits;
            if dot >= to || bytes[dot] != b'.' {
                return None;
            }
            (TagKind::OrderedList, dot + 1)
        }
        _ => return None,
    };
    if after >= to || bytes[after] != b' ' {
        return None;
    }
    let tag = line_tag(kind, line_start, after + 1, text, to);
    if !tag.has_text() {
        trace!(position = line_start, "empty list item");
        return None;
    }
    Some(tag)
}

/// `[text](url)` on a single line; text is required, the url may be empty.
pub fn link(text: &str, open: usize, to: usize) -> Option<Tag> {
    let bytes = text.as_bytes();
    let mut flags = TagFlags::empty();

    let close_text = delimited(text, open + 1, to, b']', &mut flags)?;
    if close_text == open + 1 {
        return None;
    }
    let open_extra = close_text + 1;
    if open_extra >= to || bytes[open_extra] != b'(' {
        return None;
    }
    let close_extra = delimited(text, open_extra + 1, to, b')', &mut flags)?;

    Some(
        Tag::new(TagKind::Link, open..close_extra + 1, open + 1..close_text)
            .with_flags(flags)
            .with_extra(open_extra + 1..close_extra),
    )
}

fn delimited(text: &str, mut i: usize, to: usize, close: u8, flags: &mut TagFlags) -> Option<usize> {
    let bytes = text.as_bytes();
    while i < to {
        let (width, escaped) = unit_at(text, i, to);
        if escaped {
            *flags |= TagFlags::ESCAPED;
        } else if bytes[i] == close {
            return Some(i);
        } else if bytes[i] == b'\n' || bytes[i] == b'[' {
            return None;
        }
        i += width;
    }
    None
}

/// Match a style run starting at `pos`.
///
/// The opening run sets the strength (capped at 3, or 2 for `~`). The first other unit
/// starts the inner text; from there each marker counts down the strength still needed.
/// When the count reaches zero the tag closes. When a closing run is interrupted before
/// that, a `*`/`_` tag narrows to the strength the run did satisfy, while `~` starts
/// counting again.
pub fn text_style(text: &str, pos: usize, to: usize) -> Option<Tag> {
    let bytes = text.as_bytes();
    let marker = bytes[pos];
    let (kind, cap, min) = if marker == b'~' {
        (TagKind::AlternativeTextStyle, 2, 2)
    } else {
        (TagKind::TextStyle, 3, 1)
    };

    let mut i = pos;
    let mut strength = 0;
    while i < to && bytes[i] == marker && strength < cap {
        strength += 1;
        i += 1;
    }
    if strength < min || i >= to {
        trace!(position = pos, strength, "style run without text");
        return None;
    }

    let mut flags = TagFlags::empty();
    let start_text = i;
    let (width, escaped) = unit_at(text, i, to);
    if escaped {
        flags |= TagFlags::ESCAPED;
    }
    i += width;

    let mut needed = strength;
    while i < to {
        let (width, escaped) = unit_at(text, i, to);
        if !escaped && bytes[i] == marker {
            needed -= 1;
            if needed == 0 {
                let end = i + 1;
                return style_tag(kind, strength, pos..end, start_text..end - strength, flags);
            }
        } else if needed != strength {
            if kind == TagKind::AlternativeTextStyle {
                needed = strength;
            } else {
                return narrowed(strength, needed, pos, start_text, i, flags);
            }
        }
        if escaped {
            flags |= TagFlags::ESCAPED;
        }
        i += width;
    }

    if needed != strength && kind == TagKind::TextStyle {
        return narrowed(strength, needed, pos, start_text, to, flags);
    }
    trace!(position = pos, strength, "unterminated style run");
    None
}

/// A partial closing run ending at `at`: keep the satisfied strength and hand the
/// unmatched opening markers to the text. Only `*` and `_` runs narrow.
fn narrowed(
    strength: usize,
    needed: usize,
    pos: usize,
    start_text: usize,
    at: usize,
    flags: TagFlags,
) -> Option<Tag> {
    let satisfied = strength - needed;
    trace!(position = pos, strength, satisfied, "style run narrowed");
    style_tag(TagKind::TextStyle, satisfied, pos..at, start_text - needed..at - satisfied, flags)
}

fn style_tag(
    kind: TagKind,
    strength: usize,
    full: std::ops::Range<usize>,
    inner: std::ops::Range<usize>,
    flags: TagFlags,
) -> Option<Tag> {
    let style = match kind {
        TagKind::AlternativeTextStyle => TagFlags::STRIKETHROUGH,
        _ => TagFlags::for_strength(strength),
    };
    Some(Tag::new(kind, full, inner).with_flags(flags | style)).filter(Tag::has_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(text: &str) -> Option<(TagFlags, &str)> {
        text_style(text, 0, text.len()).map(|tag| (tag.flags, &text[tag.text_range()]))
    }

    #[test]
    fn test_clean_close() {
        assert_eq!(style("*a*"), Some((TagFlags::ITALICS, "a")));
        assert_eq!(style("__a__"), Some((TagFlags::BOLD, "a")));
        assert_eq!(style("***a***"), Some((TagFlags::BOLD_ITALICS, "a")));
    }

    #[test]
    fn test_fourth_marker_starts_text() {
        assert_eq!(style("****a***"), Some((TagFlags::BOLD_ITALICS, "*a")));
    }

    #[test]
    fn test_narrowing_keeps_satisfied_strength() {
        let text = "***combination** tag*.";
        let tag = text_style(text, 0, text.len()).unwrap();
        assert_eq!(tag.flags, TagFlags::BOLD);
        assert_eq!(&text[tag.text_range()], "*combination");
        assert_eq!(&text[tag.full_range()], "***combination**");
    }

    #[test]
    fn test_narrowing_at_range_end() {
        let text = "**a*";
        let tag = text_style(text, 0, text.len()).unwrap();
        assert_eq!(tag.flags, TagFlags::ITALICS);
        assert_eq!(&text[tag.text_range()], "*a");
        assert_eq!(tag.full_range(), 0..4);
    }

    #[test]
    fn test_underscore_runs_narrow_to_text_style() {
        let text = "__a_ b";
        let tag = text_style(text, 0, text.len()).unwrap();
        assert_eq!(tag.kind, TagKind::TextStyle);
        assert_eq!(tag.flags, TagFlags::ITALICS);
        assert_eq!(&text[tag.text_range()], "_a");
        assert_eq!(&text[tag.full_range()], "__a_");
    }

    #[test]
    fn test_unterminated_run_is_discarded() {
        assert_eq!(style("*abc"), None);
        assert_eq!(style("**"), None);
        assert_eq!(style("~a~"), None);
    }

    #[test]
    fn test_strikethrough_does_not_narrow() {
        assert_eq!(style("~~a~b~~"), Some((TagFlags::STRIKETHROUGH, "a~b")));
        let text = "~~a~";
        assert!(text_style(text, 0, text.len()).is_none());
    }

    #[test]
    fn test_escaped_marker_does_not_close() {
        let text = "*a\\*b*";
        let tag = text_style(text, 0, text.len()).unwrap();
        assert_eq!(&text[tag.text_range()], "a\\*b");
        assert!(tag.is_escaped());
    }

    #[test]
    fn test_header_levels() {
        let text = "  ##   Last header";
        let tag = header(text, 0, 2, text.len()).unwrap();
        assert_eq!(tag.weight, 2);
        assert_eq!(&text[tag.text_range()], "Last header");
        assert_eq!(tag.full_range(), 0..text.len());

        let text = "####### seven";
        let tag = header(text, 0, 0, text.len()).unwrap();
        assert_eq!(tag.weight, 6);
        assert_eq!(&text[tag.text_range()], "# seven");
    }

    #[test]
    fn test_header_includes_newline_in_full_range() {
        let text = "# A\nrest";
        let tag = header(text, 0, 0, text.len()).unwrap();
        assert_eq!(tag.text_range(), 2..3);
        assert_eq!(tag.end_position, 4);
    }

    #[test]
    fn test_empty_header_is_discarded() {
        assert!(header("##   \nx", 0, 0, 7).is_none());
        assert!(header("#", 0, 0, 1).is_none());
    }

    #[test]
    fn test_list_items() {
        let text = "12. twelve";
        let tag = list_item(text, 0, 0, text.len()).unwrap();
        assert_eq!(tag.kind, TagKind::OrderedList);
        assert_eq!(&text[tag.text_range()], "twelve");

        assert!(list_item("-x", 0, 0, 2).is_none());
        assert!(list_item("1.5", 0, 0, 3).is_none());
        assert!(list_item("- \n", 0, 0, 3).is_none());
    }

    #[test]
    fn test_link() {
        let text = "[docs](https://example.com) after";
        let tag = link(text, 0, text.len()).unwrap();
        assert_eq!(&text[tag.text_range()], "docs");
        assert_eq!(tag.extra.clone().map(|r| &text[r]), Some("https://example.com"));
        assert_eq!(&text[tag.full_range()], "[docs](https://example.com)");
    }

    #[test]
    fn test_incomplete_links() {
        for text in ["[]()", "[a] (b)", "[a](b", "[a\n](b)", "[a"] {
            assert!(link(text, 0, text.len()).is_none(), "{text:?}");
        }
    }

    #[test]
    fn test_inline_scope_ignores_line_constructs() {
        let text = "# not a header";
        assert!(search(text, 0, text.len(), Scope::Inline).is_none());
        assert_eq!(
            search(text, 0, text.len(), Scope::Block).map(|t| t.kind),
            Some(TagKind::Header)
        );
    }

    #[test]
    fn test_search_skips_failed_runs() {
        let text = "~x ~~y~~";
        let tag = search(text, 0, text.len(), Scope::Inline).unwrap();
        assert_eq!(tag.kind, TagKind::AlternativeTextStyle);
        assert_eq!(tag.full_range(), 3..8);
    }
}
