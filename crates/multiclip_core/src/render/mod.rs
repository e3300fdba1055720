//! Pure text rendering for picker candidates and formatted output.
//!
//! # Responsibility
//! - Render one-line candidate labels and capped previews for selectors.
//! - Render ordered items into a single block in a chosen `Style`.
//!
//! # Invariants
//! - Rendering is deterministic and performs no I/O.

pub mod candidate;
pub mod formatter;

pub use candidate::{render_candidate, render_preview, CandidateLabel};
pub use formatter::{format_items, style_items, trim_blank_lines};
