//! Ordered tag collection
//!
//!     The most recent tag is held back until the next one arrives, so that whitespace
//!     which forms no tag of its own can still be folded into its full range. Whitespace
//!     with no tag before it (start of text, or right after a paragraph break) goes to
//!     the next content tag instead. This keeps the full ranges tiling the source.

use crate::markdown::tag::{Tag, TagKind};

#[derive(Debug, Default)]
pub struct TagSink {
    emitted: Vec<Tag>,
    pending: Option<Tag>,
    uncovered: Option<usize>,
}

impl TagSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut tag: Tag) {
        if tag.kind != TagKind::Paragraph {
            if let Some(start) = self.uncovered.take() {
                tag.start_position = start;
            }
        }
        if let Some(previous) = self.pending.replace(tag) {
            self.emitted.push(previous);
        }
    }

    /// Attach `start..end`, which produced no tag, to a neighbouring tag.
    pub fn cover(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        match self.pending.as_mut() {
            Some(tag) if tag.kind != TagKind::Paragraph && tag.end_position == start => {
                tag.end_position = end;
            }
            _ => {
                self.uncovered.get_or_insert(start);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Tag> {
        self.emitted.extend(self.pending);
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_extends_previous_tag() {
        let mut sink = TagSink::new();
        sink.push(Tag::new(TagKind::Header, 0..4, 2..3));
        sink.cover(4, 6);
        sink.push(Tag::new(TagKind::Header, 6..10, 8..9));
        let tags = sink.finish();
        assert_eq!(tags[0].full_range(), 0..6);
        assert_eq!(tags[1].full_range(), 6..10);
    }

    #[test]
    fn test_leading_gap_moves_to_next_tag() {
        let mut sink = TagSink::new();
        sink.cover(0, 3);
        sink.push(Tag::new(TagKind::Header, 3..8, 5..8));
        let tags = sink.finish();
        assert_eq!(tags[0].full_range(), 0..8);
        assert_eq!(tags[0].text_range(), 5..8);
    }

    #[test]
    fn test_paragraph_is_never_widened() {
        let mut sink = TagSink::new();
        sink.push(Tag::paragraph(3, 1));
        sink.cover(3, 5);
        sink.push(Tag::new(TagKind::Normal, 5..6, 5..6));
        let tags = sink.finish();
        assert_eq!(tags[0].full_range(), 3..3);
        assert_eq!(tags[1].full_range(), 3..6);
    }
}
