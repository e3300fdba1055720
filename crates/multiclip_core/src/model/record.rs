//! Clipboard history record model.
//!
//! # Responsibility
//! - Define the canonical text record read from a history store.
//! - Provide small line-oriented helpers used by label rendering.
//!
//! # Invariants
//! - `id` is assigned by the external store and is unique per store.
//! - `content` is the full, unmodified clipboard text.

use super::text::split_lines;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a clipboard record (SQLite `rowid`).
pub type RecordId = i64;

/// One text entry from the clipboard history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub content: String,
    /// Raw ordering key from the store; larger is more recent.
    pub timestamp: i64,
}

impl Record {
    pub fn new(id: RecordId, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp,
        }
    }

    /// Returns the number of logical lines, counting empty content as one.
    pub fn line_count(&self) -> usize {
        split_lines(&self.content).count().max(1)
    }

    /// Returns the first logical line, or `""` for empty content.
    pub fn first_line(&self) -> &str {
        split_lines(&self.content).next().unwrap_or("")
    }
}
