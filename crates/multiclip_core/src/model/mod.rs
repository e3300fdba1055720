//! Domain model for clipboard records and rendering styles.
//!
//! # Responsibility
//! - Define the read-only record shape returned by history stores.
//! - Define the closed set of output styles shared by picker and sender.
//!
//! # Invariants
//! - Records are never mutated after they are read from a store.
//! - Style names are stable; they are used on the command line and in serde.

pub mod record;
pub mod style;
pub mod text;
