//! Capability ports for the OS clipboard and keystroke automation.
//!
//! Implementations live outside core; the delivery controller only sees
//! these traits.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identity of the application that currently has input focus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusIdentity(String);

impl FocusIdentity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FocusIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clipboard primitive failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    pub message: String,
}

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "clipboard unavailable: {}", self.message)
    }
}

impl Error for ClipboardError {}

/// Focus/keystroke primitive failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomationError {
    pub message: String,
}

impl AutomationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for AutomationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "automation failed: {}", self.message)
    }
}

impl Error for AutomationError {}

/// System clipboard text access.
pub trait ClipboardPort {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Focus inspection and keystroke injection.
pub trait AutomationPort {
    /// Returns the identity of the focused application.
    fn current_focus(&mut self) -> Result<FocusIdentity, AutomationError>;
    /// Issues the platform paste shortcut.
    fn paste(&mut self) -> Result<(), AutomationError>;
    /// Issues the confirm/submit key.
    fn confirm(&mut self) -> Result<(), AutomationError>;
}

impl<T: ClipboardPort + ?Sized> ClipboardPort for &mut T {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        (**self).read_text()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

impl<T: AutomationPort + ?Sized> AutomationPort for &mut T {
    fn current_focus(&mut self) -> Result<FocusIdentity, AutomationError> {
        (**self).current_focus()
    }

    fn paste(&mut self) -> Result<(), AutomationError> {
        (**self).paste()
    }

    fn confirm(&mut self) -> Result<(), AutomationError> {
        (**self).confirm()
    }
}
