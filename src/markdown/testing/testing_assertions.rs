//! Fluent assertion API for tag streams

use super::testing_matchers::{Span, SpanMatch, TextMatch};
use crate::markdown::formats::TagStream;
use crate::markdown::tag::{Tag, TagFlags, TagKind};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a scanned stream
pub fn assert_tags<'s, 'a>(stream: &'s TagStream<'a>) -> TagsAssertion<'s, 'a> {
    TagsAssertion { stream }
}

/// One-line summary of a tag sequence, used in failure messages
pub fn summarize(stream: &TagStream<'_>) -> String {
    stream
        .tags()
        .iter()
        .map(|tag| match tag.kind {
            TagKind::Paragraph => format!("paragraph({})", tag.weight),
            kind => format!("{}{:?}", kind, stream.text(tag)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct TagsAssertion<'s, 'a> {
    stream: &'s TagStream<'a>,
}

impl<'s, 'a> TagsAssertion<'s, 'a> {
    /// Assert the number of tags
    pub fn count(self, expected: usize) -> Self {
        let actual = self.stream.tags().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} tags, found {} tags: [{}]",
            expected,
            actual,
            summarize(self.stream)
        );
        self
    }

    /// Assert the kinds of all tags, in order
    pub fn kinds(self, expected: &[TagKind]) -> Self {
        let actual: Vec<TagKind> = self.stream.tags().iter().map(|tag| tag.kind).collect();
        assert_eq!(
            actual,
            expected,
            "Tag kinds differ: [{}]",
            summarize(self.stream)
        );
        self
    }

    /// Assert on a specific tag by index
    pub fn tag<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TagAssertion<'s, 'a>),
    {
        let tags = self.stream.tags();
        assert!(
            index < tags.len(),
            "Tag index {} out of bounds ({} tags: [{}])",
            index,
            tags.len(),
            summarize(self.stream)
        );
        assertion(TagAssertion {
            stream: self.stream,
            tag: &tags[index],
            context: format!("tags[{}]", index),
        });
        self
    }

    /// Assert that the full ranges of the tags rebuild the source
    pub fn covers_source(self) -> Self {
        let rebuilt: String = self
            .stream
            .tags()
            .iter()
            .map(|tag| self.stream.raw_full(tag))
            .collect();
        assert_eq!(
            rebuilt,
            self.stream.source(),
            "Full ranges don't cover the source: [{}]",
            summarize(self.stream)
        );
        self
    }
}

// ============================================================================
// Single Tag Assertions
// ============================================================================

pub struct TagAssertion<'s, 'a> {
    stream: &'s TagStream<'a>,
    tag: &'s Tag,
    context: String,
}

impl<'s, 'a> TagAssertion<'s, 'a> {
    pub fn tag(&self) -> &Tag {
        self.tag
    }

    /// Assert the tag kind
    pub fn kind(self, expected: TagKind) -> Self {
        assert_eq!(
            self.tag.kind, expected,
            "{}: Expected {} tag, found {} ({:?})",
            self.context,
            expected,
            self.tag.kind,
            self.stream.text(self.tag)
        );
        self
    }

    pub fn normal(self) -> Self {
        self.kind(TagKind::Normal)
    }

    pub fn paragraph(self, weight: u32) -> Self {
        self.kind(TagKind::Paragraph).weight(weight)
    }

    pub fn header(self, level: u32) -> Self {
        self.kind(TagKind::Header).weight(level)
    }

    pub fn unordered_item(self, depth: u32) -> Self {
        self.kind(TagKind::UnorderedList).weight(depth)
    }

    pub fn ordered_item(self, depth: u32) -> Self {
        self.kind(TagKind::OrderedList).weight(depth)
    }

    pub fn link(self) -> Self {
        self.kind(TagKind::Link)
    }

    /// A TextStyle tag with exactly these style bits
    pub fn text_style(self, style: TagFlags) -> Self {
        self.kind(TagKind::TextStyle).style(style)
    }

    /// An AlternativeTextStyle tag with exactly these style bits
    pub fn alternative_style(self, style: TagFlags) -> Self {
        self.kind(TagKind::AlternativeTextStyle).style(style)
    }

    pub fn weight(self, expected: u32) -> Self {
        assert_eq!(
            self.tag.weight, expected,
            "{}: Expected weight {}, found {}",
            self.context, expected, self.tag.weight
        );
        self
    }

    /// Assert the style bits, ignoring the escape flag
    pub fn style(self, expected: TagFlags) -> Self {
        assert_eq!(
            self.tag.flags.style(),
            expected,
            "{}: Expected style '{}', found '{}'",
            self.context,
            expected.describe(),
            self.tag.flags.style().describe()
        );
        self
    }

    pub fn escaped(self, expected: bool) -> Self {
        assert_eq!(
            self.tag.is_escaped(),
            expected,
            "{}: Expected escaped={}, flags are '{}'",
            self.context,
            expected,
            self.tag.flags.describe()
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        self.matches(Span::Text, TextMatch::Exact(expected.to_string()))
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        self.matches(Span::Text, TextMatch::StartsWith(prefix.to_string()))
    }

    pub fn text_contains(self, substring: &str) -> Self {
        self.matches(Span::Text, TextMatch::Contains(substring.to_string()))
    }

    /// Assert the full span, markers included (escapes resolved)
    pub fn full(self, expected: &str) -> Self {
        self.matches(Span::Full, TextMatch::Exact(expected.to_string()))
    }

    /// Assert the full span as written in the source, backslashes kept
    pub fn raw(self, expected: &str) -> Self {
        self.matches(Span::Raw, TextMatch::Exact(expected.to_string()))
    }

    /// Assert the link payload
    pub fn extra(self, expected: &str) -> Self {
        self.matches(Span::Extra, TextMatch::Exact(expected.to_string()))
    }

    pub fn no_extra(self) -> Self {
        self.matches(Span::Extra, TextMatch::Empty)
    }

    pub fn matches(self, span: Span, expected: TextMatch) -> Self {
        SpanMatch::new(span, expected).assert(self.stream, self.tag, &self.context);
        self
    }
}
