//! XML-like tag stream serialization
//!
//! One element per tag, in scan order, wrapped in a `<document>` element:
//!
//! - Tag kind → element name
//! - Weight (headers, lists, paragraphs) → `weight` attribute
//! - Style bits → `style` attribute
//! - Link url → `href` attribute
//! - Extracted text → content, newlines written as `&#10;`
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <header weight="1">Caption</header>
//!   <normal>Some </normal>
//!   <text-style style="bold">bold</text-style>
//!   <paragraph weight="1"/>
//! </document>
//! ```

use super::TagStream;
use crate::markdown::tag::{Tag, TagKind};

/// Serialize a tag stream to the XML-like format.
pub fn serialize_stream(stream: &TagStream<'_>) -> String {
    let mut output = String::from("<document>\n");
    for tag in stream.tags() {
        output.push_str("  ");
        output.push_str(&element(stream, tag));
        output.push('\n');
    }
    output.push_str("</document>\n");
    output
}

fn element(stream: &TagStream<'_>, tag: &Tag) -> String {
    let name = tag.kind.as_str();
    let mut attributes = String::new();
    if matches!(tag.kind, TagKind::Header | TagKind::Paragraph) || tag.kind.is_list() {
        attributes.push_str(&format!(" weight=\"{}\"", tag.weight));
    }
    let style = tag.flags.style();
    if !style.is_empty() {
        attributes.push_str(&format!(" style=\"{}\"", style.describe()));
    }
    if let Some(url) = stream.extra(tag) {
        attributes.push_str(&format!(" href=\"{}\"", escape_xml(&url)));
    }

    if tag.kind == TagKind::Paragraph {
        format!("<{name}{attributes}/>")
    } else {
        let text = escape_xml(&stream.text(tag));
        format!("<{name}{attributes}>{text}</{name}>")
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
}
