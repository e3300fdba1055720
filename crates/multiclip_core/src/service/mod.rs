//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate sources, renderers and delivery into picker/sender flows.
//! - Keep CLI and tool adapters decoupled from core logic.

pub mod picker;
pub mod selector;
pub mod sender;
