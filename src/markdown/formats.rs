//! Output formats for scanned tag streams
//!
//! A [`TagStream`] is what every format reads: the source, its tags and the strings
//! behind them. The formats themselves are a closed set picked by name:
//! - tag: XML-like, one element per tag
//! - treeviz: one line per tag with an icon, for quick inspection
//! - json / yaml: the raw tag records plus their extracted text

pub mod json;
pub mod tag;
pub mod treeviz;
pub mod yaml;

pub use treeviz::to_treeviz_str;

use super::extraction;
use super::offsets::{CharIndex, OffsetUnit};
use super::parser::MarkdownParser;
use super::tag::{Tag, TagFlags};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format with this name
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// The built-in output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Tag,
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Tag,
        OutputFormat::Treeviz,
        OutputFormat::Yaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Tag => "XML-like tag stream, one element per tag",
            OutputFormat::Treeviz => "One line per tag with icons",
            OutputFormat::Json => "Tag records and their text as a JSON array",
            OutputFormat::Yaml => "Tag records and their text as a YAML sequence",
        }
    }

    /// Serialize a tag stream in this format
    pub fn serialize(&self, stream: &TagStream<'_>) -> Result<String, FormatError> {
        match self {
            OutputFormat::Tag => Ok(tag::serialize_stream(stream)),
            OutputFormat::Treeviz => Ok(treeviz::to_treeviz_str(stream)),
            OutputFormat::Json => json::serialize(stream),
            OutputFormat::Yaml => yaml::serialize(stream),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source text together with the tags a parser found in it.
///
/// The tags keep the parser's offset unit. For character offsets the stream indexes
/// the source once, so extracting the text of every tag stays linear.
pub struct TagStream<'a> {
    source: &'a str,
    tags: Vec<Tag>,
    chars: Option<CharIndex>,
}

impl<'a> TagStream<'a> {
    pub fn scan(parser: &dyn MarkdownParser, source: &'a str) -> Self {
        let chars = match parser.offset_unit() {
            OffsetUnit::Bytes => None,
            OffsetUnit::Chars => Some(CharIndex::new(source)),
        };
        TagStream {
            source,
            tags: parser.find_tags(source),
            chars,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn offset_unit(&self) -> OffsetUnit {
        if self.chars.is_some() {
            OffsetUnit::Chars
        } else {
            OffsetUnit::Bytes
        }
    }

    /// The tag with byte offsets into the source.
    pub fn in_bytes<'t>(&self, tag: &'t Tag) -> Cow<'t, Tag> {
        match &self.chars {
            Some(index) => Cow::Owned(index.tag_to_bytes(tag)),
            None => Cow::Borrowed(tag),
        }
    }

    pub fn text(&self, tag: &Tag) -> Cow<'a, str> {
        extraction::extract_text(self.source, &self.in_bytes(tag))
    }

    pub fn full(&self, tag: &Tag) -> Cow<'a, str> {
        extraction::extract_full(self.source, &self.in_bytes(tag))
    }

    /// Full span exactly as written, escapes kept.
    pub fn raw_full(&self, tag: &Tag) -> Cow<'a, str> {
        let mut raw = self.in_bytes(tag).into_owned();
        raw.flags.remove(TagFlags::ESCAPED);
        extraction::extract_full(self.source, &raw)
    }

    pub fn extra(&self, tag: &Tag) -> Option<Cow<'a, str>> {
        extraction::extract_extra(self.source, &self.in_bytes(tag))
    }

    /// Serializable view of every tag with its extracted strings.
    pub fn views(&self) -> Vec<TagView<'_>> {
        self.tags
            .iter()
            .map(|tag| TagView {
                tag,
                text: self.text(tag),
                extra_text: self.extra(tag),
            })
            .collect()
    }
}

/// A tag record with its text resolved, as written by the data formats.
#[derive(Debug, Serialize)]
pub struct TagView<'a> {
    #[serde(flatten)]
    pub tag: &'a Tag,
    pub text: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_text: Option<Cow<'a, str>>,
}
