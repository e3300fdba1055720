//! Read-only access to the external clipboard history store.
//!
//! # Responsibility
//! - Define the query contract used by the picker flow.
//! - Keep SQLite details inside the source boundary.
//!
//! # Invariants
//! - Sources never write to the store.
//! - Each call acquires and releases its own connection.
//! - `fetch_by_ids` preserves the caller's id order and drops unknown ids.

use crate::model::record::{Record, RecordId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;
pub mod sqlite;

pub use open::{open_read_only, STORE_BUSY_TIMEOUT};
pub use sqlite::SqliteRecordSource;

pub type SourceResult<T> = Result<T, SourceError>;

/// Record source failure.
#[derive(Debug)]
pub enum SourceError {
    /// Store file is missing or cannot be opened.
    Unavailable { path: PathBuf, reason: String },
    /// Store lock was not acquired within the busy timeout.
    Busy,
    /// Any other SQLite failure while querying.
    Query(rusqlite::Error),
}

impl SourceError {
    pub(crate) fn from_query(err: rusqlite::Error) -> Self {
        if is_busy_error(&err) {
            return Self::Busy;
        }
        Self::Query(err)
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { path, reason } => write!(
                f,
                "clipboard history store unavailable at `{}`: {reason}",
                path.display()
            ),
            Self::Busy => write!(f, "clipboard history store is busy; try again"),
            Self::Query(err) => write!(f, "clipboard history query failed: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Query(err) => Some(err),
            Self::Unavailable { .. } | Self::Busy => None,
        }
    }
}

/// Read-only query interface over a clipboard history store.
pub trait RecordSource {
    /// Returns up to `limit` non-empty text records, newest first.
    fn fetch_recent(&self, limit: u32) -> SourceResult<Vec<Record>>;

    /// Returns records for `ids` in the same order, skipping unknown and
    /// repeated ids.
    fn fetch_by_ids(&self, ids: &[RecordId]) -> SourceResult<Vec<Record>>;

    /// Returns one record by id.
    fn fetch_one(&self, id: RecordId) -> SourceResult<Option<Record>> {
        Ok(self.fetch_by_ids(&[id])?.into_iter().next())
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn fetch_recent(&self, limit: u32) -> SourceResult<Vec<Record>> {
        (**self).fetch_recent(limit)
    }

    fn fetch_by_ids(&self, ids: &[RecordId]) -> SourceResult<Vec<Record>> {
        (**self).fetch_by_ids(ids)
    }
}

fn is_busy_error(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
    )
}
