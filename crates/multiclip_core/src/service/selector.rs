//! Interactive selection capability ports.

use crate::model::record::RecordId;
use crate::model::style::Style;
use crate::render::candidate::CandidateLabel;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Selector could not run at all (as opposed to the user declining).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorError {
    pub message: String,
}

impl SelectorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for SelectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "selector failed: {}", self.message)
    }
}

impl Error for SelectorError {}

/// Multi-select over candidate labels.
pub trait CandidateSelector {
    /// Returns chosen ids in selection order, or `None` when nothing was
    /// picked.
    fn select(
        &mut self,
        candidates: &[CandidateLabel],
    ) -> Result<Option<Vec<RecordId>>, SelectorError>;
}

/// Single choice among output styles.
pub trait StyleChooser {
    fn choose(&mut self, styles: &[Style]) -> Result<Option<Style>, SelectorError>;
}

/// Chooser that always answers with a preset style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStyle(pub Style);

impl StyleChooser for FixedStyle {
    fn choose(&mut self, _styles: &[Style]) -> Result<Option<Style>, SelectorError> {
        Ok(Some(self.0))
    }
}
