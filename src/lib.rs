//! mdtags: a markdown tag scanner
//!
//! Converts markdown source into an ordered sequence of typed, offset-tagged spans
//! ("tags") for headers, emphasis and strikethrough runs, paragraph breaks, list items
//! and links. See [`markdown`] for the details.

pub mod markdown;

pub use markdown::{extract_full, extract_text, find_tags, Tag, TagFlags, TagKind};
