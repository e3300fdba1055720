#![allow(dead_code)]

use multiclip_core::{
    AutomationError, AutomationPort, CandidateLabel, CandidateSelector, ClipboardError,
    ClipboardPort, FocusIdentity, RecordId, SelectorError, Style, StyleChooser,
};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Alfred-shaped clipboard store on disk.
pub struct StoreFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl StoreFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipboard.alfdb");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE clipboard (
                item TEXT,
                ts DECIMAL,
                app TEXT,
                apppath TEXT,
                dataType INTEGER,
                dataHash TEXT
            );",
        )
        .unwrap();
        Self { _dir: dir, path }
    }

    /// Inserts a row with an explicit rowid.
    pub fn insert(&self, rowid: i64, item: Option<&str>, ts: i64, data_type: i64) {
        let conn = self.connect();
        conn.execute(
            "INSERT INTO clipboard (rowid, item, ts, dataType) VALUES (?1, ?2, ?3, ?4);",
            params![rowid, item, ts, data_type],
        )
        .unwrap();
    }

    pub fn insert_text(&self, rowid: i64, item: &str, ts: i64) {
        self.insert(rowid, Some(item), ts, 0);
    }

    pub fn connect(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// In-memory clipboard that records every write.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub content: String,
    pub writes: Vec<String>,
    pub fail_reads: bool,
    /// Fails the n-th write (0-based) when set.
    pub fail_write_at: Option<usize>,
}

impl FakeClipboard {
    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Self::default()
        }
    }
}

impl ClipboardPort for FakeClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        if self.fail_reads {
            return Err(ClipboardError::new("no text on pasteboard"));
        }
        Ok(self.content.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_write_at == Some(self.writes.len()) {
            self.writes.push(format!("<failed:{text}>"));
            return Err(ClipboardError::new("pasteboard locked"));
        }
        self.writes.push(text.to_string());
        self.content = text.to_string();
        Ok(())
    }
}

/// Scripted focus/keystroke primitive.
///
/// `focus_script[n]` is returned by the n-th focus query; the last entry
/// repeats once the script runs out.
#[derive(Debug, Default)]
pub struct FakeAutomation {
    pub focus_script: Vec<String>,
    pub focus_queries: usize,
    pub pastes: usize,
    pub confirms: usize,
    /// Fails the n-th paste (0-based) when set.
    pub fail_paste_at: Option<usize>,
    pub fail_focus: bool,
}

impl FakeAutomation {
    pub fn focused_on(app: &str) -> Self {
        Self {
            focus_script: vec![app.to_string()],
            ..Self::default()
        }
    }

    pub fn with_script(script: &[&str]) -> Self {
        Self {
            focus_script: script.iter().map(|app| app.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl AutomationPort for FakeAutomation {
    fn current_focus(&mut self) -> Result<FocusIdentity, AutomationError> {
        if self.fail_focus {
            return Err(AutomationError::new("System Events not permitted"));
        }
        let index = self.focus_queries.min(self.focus_script.len().saturating_sub(1));
        self.focus_queries += 1;
        Ok(FocusIdentity::new(self.focus_script[index].clone()))
    }

    fn paste(&mut self) -> Result<(), AutomationError> {
        if self.fail_paste_at == Some(self.pastes) {
            return Err(AutomationError::new("keystroke rejected"));
        }
        self.pastes += 1;
        Ok(())
    }

    fn confirm(&mut self) -> Result<(), AutomationError> {
        self.confirms += 1;
        Ok(())
    }
}

/// Selector returning a preset answer and remembering what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    pub answer: Option<Vec<RecordId>>,
    pub shown: Vec<CandidateLabel>,
}

impl ScriptedSelector {
    pub fn picking(ids: &[RecordId]) -> Self {
        Self {
            answer: Some(ids.to_vec()),
            shown: Vec::new(),
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }
}

impl CandidateSelector for ScriptedSelector {
    fn select(
        &mut self,
        candidates: &[CandidateLabel],
    ) -> Result<Option<Vec<RecordId>>, SelectorError> {
        self.shown = candidates.to_vec();
        Ok(self.answer.clone())
    }
}

/// Style chooser that declines.
pub struct NoStyle;

impl StyleChooser for NoStyle {
    fn choose(&mut self, _styles: &[Style]) -> Result<Option<Style>, SelectorError> {
        Ok(None)
    }
}
