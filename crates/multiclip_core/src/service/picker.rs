//! Picker use-case: choose history records and format them as one block.
//!
//! # Responsibility
//! - Load recent records, hand labels to a selector, re-fetch the chosen
//!   records and format them.
//!
//! # Invariants
//! - Output order is the selector's order, never store recency order.
//! - Repeated ids in a selection are rendered once.
//! - Selected ids that no longer resolve are dropped silently.

use super::selector::{CandidateSelector, SelectorError, StyleChooser};
use crate::config::PickerConfig;
use crate::model::record::RecordId;
use crate::model::style::Style;
use crate::render::candidate::{render_candidate, render_preview, CandidateLabel};
use crate::render::formatter::format_items;
use crate::source::{RecordSource, SourceError, SourceResult};
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Exit status used when the user cancels a selection.
pub const EXIT_CANCELLED: i32 = 130;

/// Picker flow failure or cancellation.
#[derive(Debug)]
pub enum PickError {
    Source(SourceError),
    Selector(SelectorError),
    /// Store has no text records.
    EmptyInput,
    /// User picked nothing, or nothing picked still exists.
    NoSelection,
}

impl PickError {
    /// Whether this is a user cancellation rather than a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::NoSelection)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoSelection => EXIT_CANCELLED,
            Self::Source(_) | Self::Selector(_) | Self::EmptyInput => 1,
        }
    }
}

impl Display for PickError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Selector(err) => write!(f, "{err}"),
            Self::EmptyInput => write!(f, "No text clipboard items found"),
            Self::NoSelection => write!(f, "No selection"),
        }
    }
}

impl Error for PickError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Selector(err) => Some(err),
            Self::EmptyInput | Self::NoSelection => None,
        }
    }
}

impl From<SourceError> for PickError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<SelectorError> for PickError {
    fn from(value: SelectorError) -> Self {
        Self::Selector(value)
    }
}

/// Formatted picker output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickResult {
    pub text: String,
    pub style: Style,
    pub item_count: usize,
}

/// Picker service over a record source.
pub struct PickerService<S: RecordSource> {
    source: S,
    limit: u32,
}

impl<S: RecordSource> PickerService<S> {
    pub fn new(source: S, config: &PickerConfig) -> Self {
        Self {
            source,
            limit: config.limit,
        }
    }

    /// Loads candidate labels for the most recent records.
    ///
    /// # Errors
    /// - `PickError::EmptyInput` when the store has no text records.
    pub fn candidates(&self) -> Result<Vec<CandidateLabel>, PickError> {
        let records = self.source.fetch_recent(self.limit)?;
        if records.is_empty() {
            return Err(PickError::EmptyInput);
        }
        Ok(records.iter().map(render_candidate).collect())
    }

    /// Runs the full picker flow.
    pub fn pick(
        &self,
        selector: &mut dyn CandidateSelector,
        chooser: &mut dyn StyleChooser,
    ) -> Result<PickResult, PickError> {
        let candidates = self.candidates()?;
        info!(
            "event=pick_candidates module=service status=ok count={}",
            candidates.len()
        );

        let selection = match selector.select(&candidates)? {
            Some(ids) => dedup_selection(ids),
            None => return Err(PickError::NoSelection),
        };
        if selection.is_empty() {
            return Err(PickError::NoSelection);
        }

        let style = chooser
            .choose(&Style::ALL)?
            .ok_or(PickError::NoSelection)?;
        self.format_selection(&selection, style)
    }

    /// Re-fetches `ids` and formats them in `style`, preserving id order.
    pub fn format_selection(
        &self,
        ids: &[RecordId],
        style: Style,
    ) -> Result<PickResult, PickError> {
        let records = self.source.fetch_by_ids(ids)?;
        if records.is_empty() {
            return Err(PickError::NoSelection);
        }

        let contents = records
            .iter()
            .map(|record| record.content.as_str())
            .collect::<Vec<_>>();
        let text = format_items(style, &contents);
        info!(
            "event=pick_format module=service status=ok requested={} resolved={} style={}",
            ids.len(),
            records.len(),
            style.as_str()
        );

        Ok(PickResult {
            text,
            style,
            item_count: records.len(),
        })
    }

    /// Returns preview text for one record, or `None` when it is gone.
    pub fn preview(&self, id: RecordId) -> SourceResult<Option<String>> {
        Ok(self
            .source
            .fetch_one(id)?
            .map(|record| render_preview(&record.content)))
    }
}

fn dedup_selection(ids: Vec<RecordId>) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
