//! macOS focus inspection and keystrokes via `osascript` and System Events.

use log::debug;
use multiclip_core::{AutomationError, AutomationPort, FocusIdentity};
use std::process::Command;

const OSASCRIPT_BIN: &str = "osascript";

const FRONTMOST_BUNDLE_SCRIPT: &str = "tell application \"System Events\" to get bundle identifier of first application process whose frontmost is true";
const PASTE_SCRIPT: &str = "tell application \"System Events\" to keystroke \"v\" using {command down}";
const CONFIRM_SCRIPT: &str = "tell application \"System Events\" to keystroke return";

/// Automation port backed by AppleScript.
///
/// Needs Accessibility permission for the calling terminal.
#[derive(Debug, Default)]
pub struct OsaScriptAutomation;

impl OsaScriptAutomation {
    fn run(&self, script: &str) -> Result<String, AutomationError> {
        let output = Command::new(OSASCRIPT_BIN)
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|err| AutomationError::new(format!("cannot run {OSASCRIPT_BIN}: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AutomationError::new(format!(
                "{OSASCRIPT_BIN} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl AutomationPort for OsaScriptAutomation {
    fn current_focus(&mut self) -> Result<FocusIdentity, AutomationError> {
        let bundle = self.run(FRONTMOST_BUNDLE_SCRIPT)?;
        if bundle.is_empty() {
            return Err(AutomationError::new("frontmost application has no bundle identifier"));
        }
        debug!("event=focus_query module=cli status=ok focus={bundle}");
        Ok(FocusIdentity::new(bundle))
    }

    fn paste(&mut self) -> Result<(), AutomationError> {
        self.run(PASTE_SCRIPT).map(drop)
    }

    fn confirm(&mut self) -> Result<(), AutomationError> {
        self.run(CONFIRM_SCRIPT).map(drop)
    }
}
