//! Treeviz formatter for tag streams
//!
//! Treeviz is a visual representation of the tag stream. It features a one line per tag
//! format, which enables quick scanning of how a text was split.
//!
//! List items are indented with 2 white spaces per nesting level beyond the first.
//!
//! So the format is :
//! <connector> <indentation> <icon><space><label> (label truncated to 30 characters)
//!
//! Example:
//!
//!   ├─ § h1 Caption 1
//!   ├─ ◦ Some lines of
//!   ├─ 𝐼 styled and
//!   ├─ 𝐁 double styled
//!   ├─ ¶ 1
//!   └─ ◦ New paragraph
//!
//! Icons
//!     Normal: ◦
//!     Paragraph: ¶
//!     TextStyle: 𝐼 (italics), 𝐁 (bold, bold-italics)
//!     AlternativeTextStyle: ∼
//!     Header: §
//!     OrderedList: №
//!     UnorderedList: •
//!     Link: ⊕

use super::TagStream;
use crate::markdown::tag::{Tag, TagFlags, TagKind};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a tag
fn get_icon(tag: &Tag) -> &'static str {
    match tag.kind {
        TagKind::Normal => "◦",
        TagKind::Paragraph => "¶",
        TagKind::TextStyle if tag.flags.contains(TagFlags::BOLD) => "𝐁",
        TagKind::TextStyle => "𝐼",
        TagKind::AlternativeTextStyle => "∼",
        TagKind::Header => "§",
        TagKind::OrderedList => "№",
        TagKind::UnorderedList => "•",
        TagKind::Link => "⊕",
    }
}

fn label(stream: &TagStream<'_>, tag: &Tag) -> String {
    let text = stream.text(tag).replace('\n', "↵");
    match tag.kind {
        TagKind::Paragraph => tag.weight.to_string(),
        TagKind::Header => format!("h{} {}", tag.weight, truncate(&text, LABEL_WIDTH)),
        _ => truncate(&text, LABEL_WIDTH),
    }
}

/// Render a tag stream as treeviz lines.
pub fn to_treeviz_str(stream: &TagStream<'_>) -> String {
    let tags = stream.tags();
    let mut output = String::new();
    for (index, tag) in tags.iter().enumerate() {
        let connector = if index + 1 == tags.len() { "└─" } else { "├─" };
        let depth = if tag.kind.is_list() {
            tag.weight.saturating_sub(1) as usize
        } else {
            0
        };
        output.push_str(&format!(
            "{} {}{} {}\n",
            connector,
            "  ".repeat(depth),
            get_icon(tag),
            label(stream, tag)
        ));
    }
    output
}
