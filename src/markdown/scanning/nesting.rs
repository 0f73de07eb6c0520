//! Nested style resolution
//!
//!     A style tag may contain other constructs inside its text. Those are flattened
//!     into siblings: the part before the nested construct, the nested construct (with
//!     the outer style merged into its flags) and the part after it. The after part is
//!     resolved again so a tag can hold several nested siblings.
//!
//!         _styled and **double styled** text_
//!         => Italic "styled and ", BoldItalic "double styled", Italic " text"
//!
//!     Dropped empty pieces hand their markers to the nested tag, so the full ranges of
//!     the result still tile the outer tag's full range.

use super::markers::{self, Scope};
use crate::markdown::tag::{Tag, TagFlags, TagKind};
use tracing::debug;

/// Split `tag` (a style tag at nesting level `depth`) into flat sibling pieces.
///
/// Styles nested deeper than `max_depth` come back as Normal tags.
pub fn resolve(text: &str, tag: Tag, depth: usize, max_depth: usize) -> Vec<Tag> {
    let mut pieces = Vec::new();
    let mut current = Some(tag);

    while let Some(outer) = current.take() {
        let found = markers::search(text, outer.start_text, outer.end_text, Scope::Inline);
        let mut nested = match found {
            Some(nested) if nested.end_position < outer.end_position => nested,
            _ => {
                pieces.push(outer);
                break;
            }
        };
        nested.flags |= outer.flags.style();

        let before = Tag::new(
            outer.kind,
            outer.start_position..nested.start_position,
            outer.start_text..nested.start_position,
        )
        .with_flags(outer.flags);
        if before.has_text() {
            pieces.push(before);
        } else {
            nested.start_position = outer.start_position;
        }

        let after = Tag::new(
            outer.kind,
            nested.end_position..outer.end_position,
            nested.end_position..outer.end_text,
        )
        .with_flags(outer.flags);
        if after.has_text() {
            current = Some(after);
        } else {
            nested.end_position = outer.end_position;
        }

        if !nested.kind.is_style() {
            pieces.push(nested);
        } else if depth + 1 > max_depth {
            debug!(depth = depth + 1, max_depth, "style nesting limit reached");
            pieces.push(plain(nested));
        } else {
            pieces.extend(resolve(text, nested, depth + 1, max_depth));
        }
    }
    pieces
}

fn plain(tag: Tag) -> Tag {
    let flags = tag.flags & TagFlags::ESCAPED;
    Tag::new(TagKind::Normal, tag.full_range(), tag.text_range()).with_flags(flags)
}
