//! Core logic for multiclip.
//!
//! Picks clipboard history records into one formatted block, and replays a
//! block of text as separate paste-and-confirm actions.

pub mod config;
pub mod delivery;
pub mod logging;
pub mod model;
pub mod render;
pub mod segment;
pub mod service;
pub mod source;

pub use config::{default_log_dir, PickerConfig};
pub use delivery::{
    AutomationError, AutomationPort, ClipboardError, ClipboardPort, DeliveryController,
    DeliveryError, DeliveryOptions, DeliveryOutcome, DeliveryReport, FocusIdentity, SessionState,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{Record, RecordId};
pub use model::style::{Style, StyleParseError};
pub use render::{format_items, render_candidate, render_preview, style_items, CandidateLabel};
pub use segment::{classify, segment, SegmentMode, Segmenter};
pub use service::picker::{PickError, PickResult, PickerService, EXIT_CANCELLED};
pub use service::selector::{CandidateSelector, FixedStyle, SelectorError, StyleChooser};
pub use service::sender::{prepare_items, read_items, send_clipboard, SendError};
pub use source::{RecordSource, SourceError, SourceResult, SqliteRecordSource};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
