//! Block-to-items segmentation.
//!
//! # Invariants
//! - The list/paragraph decision is made once per input, before splitting.
//! - Blank lines never contribute to an item.
//! - Returned items are trimmed and never empty.

use super::prefix::{default_matchers, PrefixMatcher};
use crate::model::text::split_lines;
use once_cell::sync::Lazy;

static DEFAULT_SEGMENTER: Lazy<Segmenter> = Lazy::new(Segmenter::default);

/// Minimum prefixed lines that make a block a list on their own.
const MIN_LIST_MATCHES: usize = 2;
/// Non-blank lines needed for a single prefixed line to make a list.
const MIN_LINES_FOR_SINGLE_MATCH: usize = 3;

/// Segmentation regime chosen for a whole block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    /// Marker lines start items, other lines continue them.
    List,
    /// Every non-blank line is its own item.
    Paragraph,
}

/// Splits text into items using an ordered set of marker matchers.
pub struct Segmenter {
    matchers: Vec<Box<dyn PrefixMatcher>>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::with_matchers(default_matchers())
    }
}

impl Segmenter {
    /// Creates a segmenter; `matchers` are tried in the given order.
    pub fn with_matchers(matchers: Vec<Box<dyn PrefixMatcher>>) -> Self {
        Self { matchers }
    }

    /// Appends a lower-priority matcher.
    pub fn push_matcher(&mut self, matcher: Box<dyn PrefixMatcher>) {
        self.matchers.push(matcher);
    }

    fn match_prefix<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.strip_prefix(line))
    }

    /// Decides list or paragraph mode for the whole block.
    pub fn classify(&self, text: &str) -> SegmentMode {
        let mut non_blank = 0usize;
        let mut matched = 0usize;
        for line in non_blank_lines(text) {
            non_blank += 1;
            if self.match_prefix(line).is_some() {
                matched += 1;
            }
        }

        if matched >= MIN_LIST_MATCHES
            || (matched >= 1 && non_blank >= MIN_LINES_FOR_SINGLE_MATCH)
        {
            SegmentMode::List
        } else {
            SegmentMode::Paragraph
        }
    }

    /// Splits `text` into ordered items.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let items: Vec<String> = match self.classify(text) {
            SegmentMode::Paragraph => non_blank_lines(text).map(str::to_string).collect(),
            SegmentMode::List => self.segment_list(text),
        };

        items
            .into_iter()
            .filter_map(|item| {
                let trimmed = item.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect()
    }

    fn segment_list(&self, text: &str) -> Vec<String> {
        let mut items = Vec::new();
        let mut current: Option<String> = None;

        for line in non_blank_lines(text) {
            if let Some(content) = self.match_prefix(line) {
                items.extend(current.replace(content.to_string()));
                continue;
            }

            match current.as_mut() {
                Some(item) => {
                    item.push('\n');
                    item.push_str(line.trim());
                }
                None => items.push(line.to_string()),
            }
        }

        items.extend(current);
        items
    }
}

/// Splits `text` into items with the built-in markers.
pub fn segment(text: &str) -> Vec<String> {
    DEFAULT_SEGMENTER.segment(text)
}

/// Classifies `text` with the built-in markers.
pub fn classify(text: &str) -> SegmentMode {
    DEFAULT_SEGMENTER.classify(text)
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    split_lines(text)
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
}
