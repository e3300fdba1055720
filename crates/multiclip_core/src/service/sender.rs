//! Sender use-case: split the clipboard into items and replay them.
//!
//! # Responsibility
//! - Read the clipboard, segment it and style each item.
//! - Hand the styled items to a delivery session.
//!
//! # Invariants
//! - Nothing is pasted when the clipboard is blank or yields no items.

use crate::delivery::{
    AutomationPort, ClipboardError, ClipboardPort, DeliveryController, DeliveryError,
    DeliveryOptions, DeliveryReport,
};
use crate::model::style::Style;
use crate::render::formatter::style_items;
use crate::segment::segment;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sender flow failure or benign stop.
#[derive(Debug)]
pub enum SendError {
    /// Clipboard could not be read before delivery started.
    Clipboard(ClipboardError),
    Delivery(DeliveryError),
    /// Clipboard is empty or whitespace only.
    EmptyInput,
    /// Segmentation produced no items.
    NoSelection,
}

impl SendError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::NoSelection)
    }

    /// Blank input and empty segmentation are reported but not failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyInput | Self::NoSelection => 0,
            Self::Clipboard(_) | Self::Delivery(_) => 1,
        }
    }
}

impl Display for SendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clipboard(err) => write!(f, "Error reading clipboard: {err}"),
            Self::Delivery(err) => write!(f, "{err}"),
            Self::EmptyInput => write!(f, "Clipboard is empty"),
            Self::NoSelection => write!(f, "No items found after parsing"),
        }
    }
}

impl Error for SendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Clipboard(err) => Some(err),
            Self::Delivery(err) => Some(err),
            Self::EmptyInput | Self::NoSelection => None,
        }
    }
}

impl From<DeliveryError> for SendError {
    fn from(value: DeliveryError) -> Self {
        Self::Delivery(value)
    }
}

/// Segments `text` and styles each item for delivery.
pub fn prepare_items(text: &str, style: Style) -> Vec<String> {
    style_items(style, &segment(text))
}

/// Reads the clipboard and prepares its items.
///
/// # Errors
/// - `SendError::EmptyInput` for a blank clipboard.
/// - `SendError::NoSelection` when segmentation yields nothing.
pub fn read_items<C: ClipboardPort + ?Sized>(
    clipboard: &mut C,
    style: Style,
) -> Result<Vec<String>, SendError> {
    let text = clipboard.read_text().map_err(SendError::Clipboard)?;
    if text.trim().is_empty() {
        return Err(SendError::EmptyInput);
    }

    let items = prepare_items(&text, style);
    if items.is_empty() {
        return Err(SendError::NoSelection);
    }
    info!(
        "event=send_prepare module=service status=ok items={} style={}",
        items.len(),
        style.as_str()
    );
    Ok(items)
}

/// Runs the whole sender flow against the given ports.
pub fn send_clipboard<C, A>(
    clipboard: &mut C,
    automation: &mut A,
    style: Style,
    options: DeliveryOptions,
) -> Result<DeliveryReport, SendError>
where
    C: ClipboardPort + ?Sized,
    A: AutomationPort + ?Sized,
{
    let items = read_items(clipboard, style)?;
    let mut controller = DeliveryController::new(clipboard, automation, options);
    Ok(controller.deliver(&items)?)
}
