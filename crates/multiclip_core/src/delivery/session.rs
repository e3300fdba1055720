//! Sequential paste-and-confirm delivery.
//!
//! # Responsibility
//! - Replay items one at a time into the focused application.
//! - Stop before the next item once focus moves elsewhere.
//! - Restore the pre-session clipboard on every exit path.
//!
//! # Invariants
//! - Focus is checked once per item boundary, never mid-item.
//! - A session that aborts before item `k` has delivered exactly `k - 1`.
//! - Restoration failures are logged and never replace the session result.

use super::port::{AutomationError, AutomationPort, ClipboardError, ClipboardPort, FocusIdentity};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::thread;
use std::time::{Duration, Instant};

/// Default pause after each confirmed item.
pub const DEFAULT_ITEM_DELAY: Duration = Duration::from_millis(250);
const SETTLE_BEFORE_FIRST_ITEM: Duration = Duration::from_millis(200);
const PASTE_CONFIRM_GAP: Duration = Duration::from_millis(50);
const SETTLE_BEFORE_RESTORE: Duration = Duration::from_millis(150);

/// Pacing for a delivery session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryOptions {
    /// Pause after each confirmed item.
    pub delay: Duration,
    /// Pause between capturing state and the first item.
    pub settle_before: Duration,
    /// Pause between paste and confirm of one item.
    pub confirm_gap: Duration,
    /// Pause after the last item before restoring the clipboard.
    pub settle_after: Duration,
}

impl Default for DeliveryOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_ITEM_DELAY,
            settle_before: SETTLE_BEFORE_FIRST_ITEM,
            confirm_gap: PASTE_CONFIRM_GAP,
            settle_after: SETTLE_BEFORE_RESTORE,
        }
    }
}

impl DeliveryOptions {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// No pauses at all.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
            settle_before: Duration::ZERO,
            confirm_gap: Duration::ZERO,
            settle_after: Duration::ZERO,
        }
    }
}

/// State captured when a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySession {
    pub items: Vec<String>,
    pub delay: Duration,
    pub initial_focus: FocusIdentity,
    /// Empty when the clipboard could not be read; restoration is skipped.
    pub saved_clipboard: String,
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    /// About to deliver the item at `next`.
    Running { next: usize },
    Completed,
    /// Focus changed before the item at `at`.
    Aborted { at: usize },
    /// A primitive failed while handling the item at `at`.
    Failed { at: usize },
}

impl SessionState {
    fn index(self) -> Option<usize> {
        match self {
            Self::Running { next } => Some(next),
            Self::Aborted { at } | Self::Failed { at } => Some(at),
            Self::Init | Self::Completed => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Running { .. } => "running",
            Self::Completed => "completed",
            Self::Aborted { .. } => "aborted",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Terminal outcome of a session that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Completed,
    Aborted { observed_focus: FocusIdentity },
}

/// Result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub outcome: DeliveryOutcome,
    pub state: SessionState,
    pub delivered: usize,
    pub total: usize,
    pub clipboard_restored: bool,
}

/// Delivery failure after which teardown still ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    Clipboard {
        delivered: usize,
        source: ClipboardError,
    },
    Automation {
        delivered: usize,
        source: AutomationError,
    },
}

impl DeliveryError {
    /// Items fully delivered before the failure.
    pub fn delivered(&self) -> usize {
        match self {
            Self::Clipboard { delivered, .. } | Self::Automation { delivered, .. } => *delivered,
        }
    }
}

impl Display for DeliveryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clipboard { delivered, source } => {
                write!(f, "{source} (after {delivered} delivered item(s))")
            }
            Self::Automation { delivered, source } => {
                write!(f, "{source} (after {delivered} delivered item(s))")
            }
        }
    }
}

impl Error for DeliveryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Clipboard { source, .. } => Some(source),
            Self::Automation { source, .. } => Some(source),
        }
    }
}

enum StepError {
    Clipboard(ClipboardError),
    Automation(AutomationError),
}

impl From<ClipboardError> for StepError {
    fn from(value: ClipboardError) -> Self {
        Self::Clipboard(value)
    }
}

impl From<AutomationError> for StepError {
    fn from(value: AutomationError) -> Self {
        Self::Automation(value)
    }
}

/// Owns the clipboard for the session and puts the snapshot back.
///
/// `restore` is called explicitly on normal and error exits; `Drop` covers
/// unwinding.
struct ClipboardRestore<'a, C: ClipboardPort + ?Sized> {
    clipboard: &'a mut C,
    saved: String,
    done: bool,
}

impl<'a, C: ClipboardPort + ?Sized> ClipboardRestore<'a, C> {
    fn new(clipboard: &'a mut C, saved: String) -> Self {
        Self {
            clipboard,
            saved,
            done: false,
        }
    }

    fn clipboard(&mut self) -> &mut C {
        &mut *self.clipboard
    }

    fn restore(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.done = true;

        if self.saved.is_empty() {
            info!("event=clipboard_restore module=delivery status=skipped reason=no_snapshot");
            return false;
        }
        match self.clipboard.write_text(&self.saved) {
            Ok(()) => {
                info!(
                    "event=clipboard_restore module=delivery status=ok chars={}",
                    self.saved.chars().count()
                );
                true
            }
            Err(err) => {
                error!("event=clipboard_restore module=delivery status=error error={err}");
                false
            }
        }
    }
}

impl<C: ClipboardPort + ?Sized> Drop for ClipboardRestore<'_, C> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Drives one delivery session over the given ports.
pub struct DeliveryController<'a, C: ClipboardPort + ?Sized, A: AutomationPort + ?Sized> {
    clipboard: &'a mut C,
    automation: &'a mut A,
    options: DeliveryOptions,
    state: SessionState,
}

impl<'a, C: ClipboardPort + ?Sized, A: AutomationPort + ?Sized> DeliveryController<'a, C, A> {
    pub fn new(clipboard: &'a mut C, automation: &'a mut A, options: DeliveryOptions) -> Self {
        Self {
            clipboard,
            automation,
            options,
            state: SessionState::Init,
        }
    }

    /// Current lifecycle state; terminal after `deliver` returns.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Delivers `items` in order.
    ///
    /// # Errors
    /// - `DeliveryError::Automation` when focus cannot be read at start, or
    ///   any keystroke/focus call fails mid-session.
    /// - `DeliveryError::Clipboard` when writing an item fails.
    ///
    /// The clipboard snapshot is restored before any error is returned.
    pub fn deliver(&mut self, items: &[String]) -> Result<DeliveryReport, DeliveryError> {
        let started_at = Instant::now();
        transition(&mut self.state, SessionState::Init);
        info!(
            "event=delivery_start module=delivery status=start items={} delay_ms={}",
            items.len(),
            self.options.delay.as_millis()
        );

        let initial_focus = match self.automation.current_focus() {
            Ok(focus) => focus,
            Err(err) => {
                transition(&mut self.state, SessionState::Failed { at: 0 });
                error!("event=delivery_start module=delivery status=error error={err}");
                return Err(DeliveryError::Automation {
                    delivered: 0,
                    source: err,
                });
            }
        };
        let saved_clipboard = match self.clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                warn!("event=clipboard_snapshot module=delivery status=error error={err}");
                String::new()
            }
        };
        let session = DeliverySession {
            items: items.to_vec(),
            delay: self.options.delay,
            initial_focus,
            saved_clipboard,
        };

        let mut restore =
            ClipboardRestore::new(&mut *self.clipboard, session.saved_clipboard.clone());
        let mut delivered = 0usize;
        pause(self.options.settle_before);

        let result = run_items(
            &session,
            &mut restore,
            &mut *self.automation,
            &self.options,
            &mut self.state,
            &mut delivered,
        );
        if matches!(result, Ok(None)) {
            pause(self.options.settle_after);
        }
        let clipboard_restored = restore.restore();
        drop(restore);
        let state = self.state;

        let total = session.items.len();
        let elapsed_ms = started_at.elapsed().as_millis();
        match result {
            Ok(None) => {
                info!(
                    "event=delivery_end module=delivery status=ok delivered={delivered} total={total} duration_ms={elapsed_ms}"
                );
                Ok(DeliveryReport {
                    outcome: DeliveryOutcome::Completed,
                    state,
                    delivered,
                    total,
                    clipboard_restored,
                })
            }
            Ok(Some(observed_focus)) => {
                warn!(
                    "event=delivery_end module=delivery status=aborted reason=focus_changed expected={} observed={} delivered={delivered} total={total} duration_ms={elapsed_ms}",
                    session.initial_focus, observed_focus
                );
                Ok(DeliveryReport {
                    outcome: DeliveryOutcome::Aborted { observed_focus },
                    state,
                    delivered,
                    total,
                    clipboard_restored,
                })
            }
            Err(err) => {
                let err = match err {
                    StepError::Clipboard(source) => DeliveryError::Clipboard { delivered, source },
                    StepError::Automation(source) => DeliveryError::Automation { delivered, source },
                };
                error!(
                    "event=delivery_end module=delivery status=error delivered={delivered} total={total} duration_ms={elapsed_ms} error={err}"
                );
                Err(err)
            }
        }
    }
}

/// Runs the item loop; `Ok(Some(focus))` means focus moved to `focus`.
fn run_items<C, A>(
    session: &DeliverySession,
    restore: &mut ClipboardRestore<'_, C>,
    automation: &mut A,
    options: &DeliveryOptions,
    state: &mut SessionState,
    delivered: &mut usize,
) -> Result<Option<FocusIdentity>, StepError>
where
    C: ClipboardPort + ?Sized,
    A: AutomationPort + ?Sized,
{
    for (index, item) in session.items.iter().enumerate() {
        transition(state, SessionState::Running { next: index });
        if item.is_empty() {
            continue;
        }

        let step = deliver_one(session, restore, automation, options, item);
        match step {
            Ok(None) => {
                *delivered += 1;
                debug!(
                    "event=delivery_item module=delivery status=ok index={index} chars={}",
                    item.chars().count()
                );
                pause(session.delay);
            }
            Ok(Some(observed)) => {
                transition(state, SessionState::Aborted { at: index });
                return Ok(Some(observed));
            }
            Err(err) => {
                transition(state, SessionState::Failed { at: index });
                return Err(err);
            }
        }
    }

    transition(state, SessionState::Completed);
    Ok(None)
}

fn deliver_one<C, A>(
    session: &DeliverySession,
    restore: &mut ClipboardRestore<'_, C>,
    automation: &mut A,
    options: &DeliveryOptions,
    item: &str,
) -> Result<Option<FocusIdentity>, StepError>
where
    C: ClipboardPort + ?Sized,
    A: AutomationPort + ?Sized,
{
    let focus = automation.current_focus()?;
    if focus != session.initial_focus {
        return Ok(Some(focus));
    }

    restore.clipboard().write_text(item)?;
    automation.paste()?;
    pause(options.confirm_gap);
    automation.confirm()?;
    Ok(None)
}

/// Moves `state` to `next`; returns `false` when nothing changed.
fn transition(state: &mut SessionState, next: SessionState) -> bool {
    if *state == next {
        return false;
    }
    debug!(
        "event=session_state module=delivery from={} to={} index={}",
        state.as_str(),
        next.as_str(),
        next.index().map_or_else(|| "-".to_string(), |index| index.to_string())
    );
    *state = next;
    true
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
