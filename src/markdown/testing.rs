//! Testing utilities for tag stream assertions
//!
//! # Scanner Testing Guidelines
//!
//! What we want from every scanner test is assurance on the whole tag sequence: which
//! tags, in which order, with which weight, flags and text. Asserting on raw offsets or
//! counts alone is not informative, and hand-written `match` blocks over tag fields get
//! long fast.
//!
//! ## The Fluent Assertion API
//!
//! ```rust-example
//! use mdtags::markdown::testing::assert_tags;
//!
//! let stream = TagStream::scan(&scanner, "Some **bold** text");
//! assert_tags(&stream)
//!     .count(3)
//!     .tag(0, |t| { t.normal().text("Some "); })
//!     .tag(1, |t| { t.text_style(TagFlags::BOLD).text("bold"); })
//!     .tag(2, |t| { t.normal().text(" text"); });
//! ```
//!
//! Failures name the tag index and print a summary of the whole sequence.
//!
//! ## Backends
//!
//! Assertions read text through the stream, which knows its offset unit, so the same
//! test can run against every [`ParserKind`](crate::markdown::parser::ParserKind) with `rstest`:
//!
//! ```rust-example
//! #[rstest(kind => [ParserKind::Scanner, ParserKind::CharOffsets])]
//! fn test_something(kind: ParserKind) { ... }
//! ```

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{assert_tags, summarize, TagAssertion, TagsAssertion};
pub use testing_matchers::{Span, SpanMatch, TextMatch};
