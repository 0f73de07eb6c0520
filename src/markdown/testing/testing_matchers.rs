//! Matchers over the strings a tag exposes
//!
//! A tag has up to four readable spans: its text, its full span with escapes resolved,
//! its full span as written, and a link's url. A [`SpanMatch`] names the span and what
//! it should hold, so a failure can say which one diverged.

use crate::markdown::formats::TagStream;
use crate::markdown::tag::Tag;
use std::borrow::Cow;
use std::fmt;

/// The part of a tag a matcher reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Inner text, escapes resolved
    Text,
    /// Markers included, escapes resolved
    Full,
    /// Markers included, exactly as in the source
    Raw,
    /// Link url
    Extra,
}

impl Span {
    fn read<'a>(self, stream: &TagStream<'a>, tag: &Tag) -> Option<Cow<'a, str>> {
        match self {
            Span::Text => Some(stream.text(tag)),
            Span::Full => Some(stream.full(tag)),
            Span::Raw => Some(stream.raw_full(tag)),
            Span::Extra => stream.extra(tag),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Span::Text => "text",
            Span::Full => "full",
            Span::Raw => "raw",
            Span::Extra => "extra",
        })
    }
}

/// Text matching strategies for a span
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
    /// The span is missing (a tag without link url) or empty
    Empty,
}

impl TextMatch {
    fn holds(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(substring) => actual.contains(substring.as_str()),
            TextMatch::Empty => actual.is_empty(),
        }
    }
}

/// One expectation on one span of a tag
#[derive(Debug, Clone)]
pub struct SpanMatch {
    pub span: Span,
    pub expected: TextMatch,
}

impl SpanMatch {
    pub fn new(span: Span, expected: TextMatch) -> Self {
        SpanMatch { span, expected }
    }

    /// Panic with `context` and the tag's kind when the span doesn't match.
    pub fn assert(&self, stream: &TagStream<'_>, tag: &Tag, context: &str) {
        let actual = self.span.read(stream, tag);
        let holds = match &actual {
            Some(text) => self.expected.holds(text),
            None => matches!(self.expected, TextMatch::Empty),
        };
        assert!(
            holds,
            "{} ({} tag): Expected {} to match {:?}, but got {:?}",
            context, tag.kind, self.span, self.expected, actual
        );
    }
}
