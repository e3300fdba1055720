//! Read-only connection bootstrap for the history store.
//!
//! # Invariants
//! - Returned connections are opened with `SQLITE_OPEN_READ_ONLY`.
//! - Returned connections wait at most `STORE_BUSY_TIMEOUT` for locks.

use super::{SourceError, SourceResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

/// Bounded wait for a store lock before a query fails with `Busy`.
pub const STORE_BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Opens the store file for reading.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
///
/// # Errors
/// - `SourceError::Unavailable` when the file is missing or cannot be opened.
pub fn open_read_only(path: &Path) -> SourceResult<Connection> {
    let started_at = Instant::now();
    info!("event=store_open module=source status=start");

    if !path.is_file() {
        error!(
            "event=store_open module=source status=error duration_ms={} error_code=store_missing",
            started_at.elapsed().as_millis()
        );
        return Err(SourceError::Unavailable {
            path: path.to_path_buf(),
            reason: "database file not found".to_string(),
        });
    }

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = match Connection::open_with_flags(path, flags) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=source status=error duration_ms={} error_code=store_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(SourceError::Unavailable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
        }
    };

    if let Err(err) = conn.busy_timeout(STORE_BUSY_TIMEOUT) {
        error!(
            "event=store_open module=source status=error duration_ms={} error_code=store_bootstrap_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(SourceError::Unavailable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
    }

    info!(
        "event=store_open module=source status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}
