//! Paragraph splitting
//!
//!     The plain text between two constructs is split wherever two or more newlines follow
//!     printable content. Each split yields the text before the run and a zero-width
//!     Paragraph tag whose weight is the number of fully blank lines:
//!
//!         "a\n\nb"      => Normal "a", Paragraph(1), Normal "b"
//!         "a\n\n\nb"    => Normal "a", Paragraph(2), Normal "b"
//!
//!     Spaces between the newlines don't break the run; any other character does, tabs
//!     and carriage returns included. Blank lines before any printable character are
//!     absorbed. A piece's text starts at its first non-whitespace character, unless the
//!     piece starts in the middle of a line (right after an inline construct), where
//!     leading spaces are content.

use super::unit_at;
use crate::markdown::tag::{Tag, TagFlags, TagKind};
use std::ops::Range;

/// One result of splitting a plain-text range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A Normal tag with content.
    Text(Tag),
    /// A Paragraph tag.
    Break(Tag),
    /// Whitespace that forms no tag of its own.
    Blank(Range<usize>),
}

pub fn split(text: &str, start: usize, end: usize) -> Vec<Segment> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();

    let mut part_start = start;
    let mut printable_at = (start > 0 && bytes[start - 1] != b'\n').then_some(start);
    let mut flags = TagFlags::empty();
    // Newlines seen since the last printable unit, the first one's position and the
    // position after the last one.
    let mut newlines = 0;
    let mut run_start = start;
    let mut run_end = start;

    let mut i = start;
    while i < end {
        match bytes[i] {
            b'\n' => {
                if printable_at.is_some() {
                    if newlines == 0 {
                        run_start = i;
                    }
                    newlines += 1;
                    run_end = i + 1;
                }
                i += 1;
            }
            b' ' => i += 1,
            // Whitespace for trimming, but it ends a newline run.
            b'\t' | b'\r' => {
                newlines = 0;
                i += 1;
            }
            _ => {
                if newlines >= 2 {
                    if let Some(from) = printable_at {
                        segments.push(piece(part_start..run_end, from..run_start, flags));
                    }
                    segments.push(Segment::Break(Tag::paragraph(run_end, newlines - 1)));
                    part_start = run_end;
                    printable_at = None;
                    flags = TagFlags::empty();
                }
                newlines = 0;
                printable_at.get_or_insert(i);

                let (width, escaped) = unit_at(text, i, end);
                if escaped {
                    flags |= TagFlags::ESCAPED;
                }
                i += width;
            }
        }
    }

    let Some(from) = printable_at else {
        segments.push(Segment::Blank(part_start..end));
        return segments;
    };
    let text_end = if newlines > 0 { run_start } else { end };
    segments.push(piece(part_start..end, from..text_end, flags));
    if newlines >= 2 {
        segments.push(Segment::Break(Tag::paragraph(end, newlines - 1)));
    }
    segments
}

fn piece(full: Range<usize>, inner: Range<usize>, flags: TagFlags) -> Segment {
    if inner.start < inner.end {
        Segment::Text(Tag::new(TagKind::Normal, full, inner).with_flags(flags))
    } else {
        Segment::Blank(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(text: &str) -> Vec<String> {
        split(text, 0, text.len())
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(tag) => format!("text {:?}", &text[tag.text_range()]),
                Segment::Break(tag) => format!("break {} at {}", tag.weight, tag.start_position),
                Segment::Blank(range) => format!("blank {range:?}"),
            })
            .collect()
    }

    #[test]
    fn test_single_newline_stays_inside_text() {
        assert_eq!(describe("a\nb"), vec!["text \"a\\nb\""]);
    }

    #[test]
    fn test_blank_line_weights() {
        assert_eq!(describe("a\n\nb"), vec!["text \"a\"", "break 1 at 3", "text \"b\""]);
        assert_eq!(describe("a\n\n\nb"), vec!["text \"a\"", "break 2 at 4", "text \"b\""]);
    }

    #[test]
    fn test_spaces_between_newlines_keep_the_run() {
        assert_eq!(describe("a\n \n b"), vec!["text \"a\"", "break 1 at 4", "text \"b\""]);
    }

    #[test]
    fn test_tabs_and_carriage_returns_end_the_run() {
        assert_eq!(describe("a\n\t\nb"), vec!["text \"a\\n\\t\\nb\""]);
        assert_eq!(describe("a\r\n\r\nb"), vec!["text \"a\\r\\n\\r\\nb\""]);
    }

    #[test]
    fn test_tabs_before_text_are_trimmed() {
        assert_eq!(describe("\t\ta"), vec!["text \"a\""]);
    }

    #[test]
    fn test_leading_blank_lines_are_absorbed() {
        let segments = split("\n\n  a", 0, 5);
        assert_eq!(segments.len(), 1);
        let Segment::Text(tag) = &segments[0] else {
            panic!("expected text, got {:?}", segments[0]);
        };
        assert_eq!(tag.full_range(), 0..5);
        assert_eq!(tag.text_range(), 4..5);
    }

    #[test]
    fn test_trailing_run_breaks_at_end() {
        assert_eq!(describe("a\n\n"), vec!["text \"a\"", "break 1 at 3"]);
        assert_eq!(describe("a\n"), vec!["text \"a\""]);
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert_eq!(describe(" \n\n "), vec!["blank 0..4"]);
    }

    #[test]
    fn test_mid_line_start_keeps_spaces() {
        let text = "**x** and";
        let segments = split(text, 5, text.len());
        let Segment::Text(tag) = &segments[0] else {
            panic!("expected text, got {:?}", segments[0]);
        };
        assert_eq!(&text[tag.text_range()], " and");
    }

    #[test]
    fn test_mid_line_newlines_before_text() {
        let text = "**x**\n\nnext";
        let segments = split(text, 5, text.len());
        assert_eq!(segments[0], Segment::Blank(5..7));
        assert_eq!(segments[1], Segment::Break(Tag::paragraph(7, 1)));
    }

    #[test]
    fn test_escape_flag_is_per_piece() {
        let text = "a \\* b\n\nplain";
        let flags: Vec<TagFlags> = split(text, 0, text.len())
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Text(tag) => Some(tag.flags),
                _ => None,
            })
            .collect();
        assert_eq!(flags, vec![TagFlags::ESCAPED, TagFlags::empty()]);
    }
}
