//! Candidate labels and previews for interactive selection.

use crate::model::record::{Record, RecordId};
use crate::model::text::split_lines;
use std::fmt::{Display, Formatter};

/// Maximum characters kept from the first line of a record.
pub const MAX_LABEL_CHARS: usize = 80;
/// Maximum lines shown by a record preview.
pub const PREVIEW_MAX_LINES: usize = 200;

const ELLIPSIS: &str = "...";
const PREVIEW_TRUNCATED_MARKER: &str = "... [preview truncated]";

/// Compact one-line view of a record.
///
/// Derived on every render and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLabel {
    pub id: RecordId,
    /// First line with tabs replaced, at most `MAX_LABEL_CHARS` characters.
    pub display_text: String,
    pub line_count: usize,
    /// Whether `display_text` was cut at `MAX_LABEL_CHARS`.
    pub truncated: bool,
}

impl Display for CandidateLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text)?;
        if self.truncated {
            f.write_str(ELLIPSIS)?;
        }
        if self.line_count > 1 {
            write!(f, "  [+{} lines]", self.line_count - 1)?;
        }
        Ok(())
    }
}

/// Renders the selector label for `record`.
pub fn render_candidate(record: &Record) -> CandidateLabel {
    let first_line = record.first_line().replace('\t', " ");
    let truncated = first_line.chars().count() > MAX_LABEL_CHARS;
    let display_text = if truncated {
        first_line.chars().take(MAX_LABEL_CHARS).collect()
    } else {
        first_line
    };

    CandidateLabel {
        id: record.id,
        display_text,
        line_count: record.line_count(),
        truncated,
    }
}

/// Renders full record content for a preview pane, capped at
/// `PREVIEW_MAX_LINES` lines.
pub fn render_preview(content: &str) -> String {
    let mut lines = split_lines(content);
    let mut preview = lines
        .by_ref()
        .take(PREVIEW_MAX_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    if lines.next().is_some() {
        preview.push('\n');
        preview.push_str(PREVIEW_TRUNCATED_MARKER);
    }
    preview
}
