//! SQLite record source over the Alfred clipboard database.
//!
//! # Responsibility
//! - Query recent text records and re-resolve selected ids.
//! - Decode rows into `Record` values.
//!
//! # Invariants
//! - Only `dataType = 0` (text) rows with non-empty `item` are listed.
//! - Connections are scoped to a single call and dropped on every path.

use super::open::open_read_only;
use super::{RecordSource, SourceError, SourceResult};
use crate::model::record::{Record, RecordId};
use log::{error, info};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

const RECENT_TEXT_SQL: &str = "SELECT rowid, item, ts
FROM clipboard
WHERE dataType = 0
  AND item IS NOT NULL
  AND item != ''
ORDER BY ts DESC
LIMIT ?1";

/// SQLite-backed, read-only record source.
#[derive(Debug, Clone)]
pub struct SqliteRecordSource {
    path: PathBuf,
}

impl SqliteRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_connection<T>(
        &self,
        op: &'static str,
        query: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> SourceResult<T> {
        let started_at = Instant::now();
        let conn = open_read_only(&self.path)?;
        let result = query(&conn).map_err(SourceError::from_query);
        drop(conn);

        match &result {
            Ok(_) => info!(
                "event=store_query module=source status=ok op={op} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_query module=source status=error op={op} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

impl RecordSource for SqliteRecordSource {
    fn fetch_recent(&self, limit: u32) -> SourceResult<Vec<Record>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        self.with_connection("fetch_recent", |conn| {
            let mut stmt = conn.prepare(RECENT_TEXT_SQL)?;
            let mut rows = stmt.query(params![i64::from(limit)])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                let record = parse_record_row(row)?;
                if !record.content.is_empty() {
                    records.push(record);
                }
            }
            Ok(records)
        })
    }

    fn fetch_by_ids(&self, ids: &[RecordId]) -> SourceResult<Vec<Record>> {
        let mut seen = HashSet::new();
        let unique_ids = ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect::<Vec<_>>();
        if unique_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; unique_ids.len()].join(",");
        let sql = format!(
            "SELECT rowid, item, ts FROM clipboard WHERE item IS NOT NULL AND rowid IN ({placeholders})"
        );

        let mut by_id = self.with_connection("fetch_by_ids", |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let mut rows = stmt.query(params_from_iter(unique_ids.iter()))?;
            let mut by_id = HashMap::with_capacity(unique_ids.len());
            while let Some(row) = rows.next()? {
                let record = parse_record_row(row)?;
                by_id.insert(record.id, record);
            }
            Ok(by_id)
        })?;

        Ok(unique_ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect())
    }
}

fn parse_record_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        content: row.get(1)?,
        timestamp: timestamp_from_value(row.get(2)?),
    })
}

// `ts` is declared without a strict type in the store; accept integer or real.
fn timestamp_from_value(value: Value) -> i64 {
    match value {
        Value::Integer(ts) => ts,
        Value::Real(ts) => ts as i64,
        Value::Text(text) => text.trim().parse::<f64>().map_or(0, |ts| ts as i64),
        Value::Null | Value::Blob(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::timestamp_from_value;
    use rusqlite::types::Value;

    #[test]
    fn timestamp_accepts_integer_real_and_text() {
        assert_eq!(timestamp_from_value(Value::Integer(42)), 42);
        assert_eq!(timestamp_from_value(Value::Real(795_000_000.75)), 795_000_000);
        assert_eq!(timestamp_from_value(Value::Text(" 12.5 ".to_string())), 12);
        assert_eq!(timestamp_from_value(Value::Null), 0);
    }
}
