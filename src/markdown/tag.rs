//! Tag data model
//!
//!     A [`Tag`] is one typed span of the source text. Every tag carries two ranges:
//!     the full range (markers included) and the text range (inner content only).
//!     Offsets are UTF-8 byte offsets into the scanned string, so both ranges can
//!     be used to slice the source directly.
//!
//!     The scanner never builds a tree: nested styles are flattened into sibling
//!     tags whose flags carry the combined style.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The closed set of constructs the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagKind {
    Normal,
    Paragraph,
    TextStyle,
    AlternativeTextStyle,
    Header,
    OrderedList,
    UnorderedList,
    Link,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Normal => "normal",
            TagKind::Paragraph => "paragraph",
            TagKind::TextStyle => "text-style",
            TagKind::AlternativeTextStyle => "alternative-text-style",
            TagKind::Header => "header",
            TagKind::OrderedList => "ordered-list",
            TagKind::UnorderedList => "unordered-list",
            TagKind::Link => "link",
        }
    }

    /// Style tags are the ones that go through nested-style resolution.
    pub fn is_style(&self) -> bool {
        matches!(self, TagKind::TextStyle | TagKind::AlternativeTextStyle)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TagKind::OrderedList | TagKind::UnorderedList)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Style and escape bits attached to a tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TagFlags: u32 {
        const ITALICS = 0x1;
        const BOLD = 0x2;
        const BOLD_ITALICS = Self::ITALICS.bits() | Self::BOLD.bits();
        const STRIKETHROUGH = 0x4;
        /// Mask of every style bit, used when merging an outer style into a nested one.
        const TEXT_STYLE = Self::BOLD_ITALICS.bits() | Self::STRIKETHROUGH.bits();
        /// The tag's ranges contain backslash escapes to resolve on extraction.
        const ESCAPED = 0x4000_0000;
    }
}

impl TagFlags {
    /// Style bits for a run of `*` or `_` markers (1 italic, 2 bold, 3 both).
    pub fn for_strength(strength: usize) -> TagFlags {
        match strength {
            0 => TagFlags::empty(),
            1 => TagFlags::ITALICS,
            2 => TagFlags::BOLD,
            _ => TagFlags::BOLD_ITALICS,
        }
    }

    /// Only the style bits.
    pub fn style(self) -> TagFlags {
        self & TagFlags::TEXT_STYLE
    }

    /// Space separated lowercase names, e.g. `"bold strikethrough"`.
    pub fn describe(self) -> String {
        let mut names = Vec::new();
        if self.contains(TagFlags::ITALICS) {
            names.push("italics");
        }
        if self.contains(TagFlags::BOLD) {
            names.push("bold");
        }
        if self.contains(TagFlags::STRIKETHROUGH) {
            names.push("strikethrough");
        }
        if self.contains(TagFlags::ESCAPED) {
            names.push("escaped");
        }
        names.join(" ")
    }
}

/// One span of scanned markdown.
///
/// `start_position <= start_text <= end_text <= end_position` holds for every
/// tag the scanner returns. Paragraph tags are zero-width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,
    /// Header level, list depth or paragraph blank-line count; 0 otherwise.
    pub weight: u32,
    pub flags: TagFlags,
    pub start_position: usize,
    pub end_position: usize,
    pub start_text: usize,
    pub end_text: usize,
    /// Link payload (the url), outside of the text range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Range<usize>>,
}

impl Tag {
    pub fn new(kind: TagKind, full: Range<usize>, text: Range<usize>) -> Self {
        Tag {
            kind,
            weight: 0,
            flags: TagFlags::empty(),
            start_position: full.start,
            end_position: full.end,
            start_text: text.start,
            end_text: text.end,
            extra: None,
        }
    }

    /// A zero-width paragraph break at `position`.
    pub fn paragraph(position: usize, weight: u32) -> Self {
        Tag::new(TagKind::Paragraph, position..position, position..position).with_weight(weight)
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_flags(mut self, flags: TagFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_extra(mut self, extra: Range<usize>) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn full_range(&self) -> Range<usize> {
        self.start_position..self.end_position
    }

    pub fn text_range(&self) -> Range<usize> {
        self.start_text..self.end_text
    }

    pub fn has_text(&self) -> bool {
        self.start_text < self.end_text
    }

    pub fn is_escaped(&self) -> bool {
        self.flags.contains(TagFlags::ESCAPED)
    }

    /// Rewrite every offset of the tag, e.g. to translate bytes into characters.
    pub fn map_offsets(&self, mut map: impl FnMut(usize) -> usize) -> Tag {
        Tag {
            kind: self.kind,
            weight: self.weight,
            flags: self.flags,
            start_position: map(self.start_position),
            end_position: map(self.end_position),
            start_text: map(self.start_text),
            end_text: map(self.end_text),
            extra: self.extra.as_ref().map(|r| map(r.start)..map(r.end)),
        }
    }
}
