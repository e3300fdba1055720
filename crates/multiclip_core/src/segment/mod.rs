//! Free-text segmentation into discrete items.
//!
//! # Responsibility
//! - Decide whether a block is a marker list or plain paragraphs.
//! - Split the block into items, joining wrapped list lines.
//!
//! # Invariants
//! - Segmentation is pure and infallible.
//! - Marker styles are pluggable without changing the mode rule.

pub mod engine;
pub mod prefix;

pub use engine::{classify, segment, SegmentMode, Segmenter};
pub use prefix::{default_matchers, PrefixMatcher, RegexPrefixMatcher};
