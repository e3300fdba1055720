//! Automated, focus-guarded delivery of items into the foreground app.
//!
//! # Responsibility
//! - Define clipboard and automation capability ports.
//! - Run the paste-and-confirm session state machine over those ports.
//!
//! # Invariants
//! - The controller is the only clipboard writer while a session runs.
//! - The clipboard snapshot is restored on completion, abort and failure.

pub mod port;
pub mod session;

pub use port::{AutomationError, AutomationPort, ClipboardError, ClipboardPort, FocusIdentity};
pub use session::{
    DeliveryController, DeliveryError, DeliveryOptions, DeliveryOutcome, DeliveryReport,
    DeliverySession, SessionState, DEFAULT_ITEM_DELAY,
};
