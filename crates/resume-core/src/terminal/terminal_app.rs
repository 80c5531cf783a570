//! Terminal.app window controller (macOS).
//!
//! Windows are addressed by the custom title of their tab. Open focuses an
//! existing tab with the requested label before falling back to creating a
//! new window, which keeps repeated resumes from stacking duplicates.

use std::collections::BTreeSet;

use crate::terminal::controller::WindowController;
use crate::terminal::errors::TerminalError;

#[cfg(target_os = "macos")]
use crate::escape::applescript_escape;
#[cfg(target_os = "macos")]
use tracing::debug;

/// AppleScript template for opening (or focusing) a labeled window.
#[cfg(target_os = "macos")]
const OPEN_SCRIPT: &str = r#"tell application "Terminal"
    repeat with w in windows
        repeat with t in tabs of w
            if custom title of t is "{label}" then
                set frontmost of w to true
                activate
                return "focused"
            end if
        end repeat
    end repeat
    do script "{command}"
    set custom title of selected tab of front window to "{label}"
    activate
    return "opened"
end tell"#;

/// AppleScript template listing every tab's custom title, one per line.
#[cfg(target_os = "macos")]
const LIST_SCRIPT: &str = r#"tell application "Terminal"
    set out to ""
    repeat with w in windows
        repeat with t in tabs of w
            try
                set out to out & custom title of t & linefeed
            end try
        end repeat
    end repeat
    return out
end tell"#;

/// AppleScript template closing the window holding the labeled tab.
///
/// Two passes: first `exit` the shell so the remote side detaches cleanly,
/// then close the window without the "running process" save prompt.
#[cfg(target_os = "macos")]
const CLOSE_SCRIPT: &str = r#"tell application "Terminal"
    repeat with i from (count windows) to 1 by -1
        try
            set w to window i
            repeat with t in tabs of w
                if custom title of t is "{label}" then
                    do script "exit" in t
                    exit repeat
                end if
            end repeat
        end try
    end repeat

    delay 0.5

    repeat with i from (count windows) to 1 by -1
        try
            set w to window i
            repeat with t in tabs of w
                if custom title of t is "{label}" then
                    close w saving no
                    exit repeat
                end if
            end repeat
        end try
    end repeat
end tell"#;

pub struct TerminalAppWindows;

impl TerminalAppWindows {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalAppWindows {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "macos")]
fn run_osascript(script: &str) -> Result<String, TerminalError> {
    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .map_err(|e| TerminalError::SpawnFailed {
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(TerminalError::OsascriptFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
impl WindowController for TerminalAppWindows {
    fn open(&self, label: &str, command: &str) -> Result<(), TerminalError> {
        let script = OPEN_SCRIPT
            .replace("{label}", &applescript_escape(label))
            .replace("{command}", &applescript_escape(command));

        let outcome = run_osascript(&script)?;
        debug!(
            event = "core.terminal.open_completed",
            label = label,
            outcome = outcome.trim()
        );
        Ok(())
    }

    fn list_labels_with_prefix(&self, prefix: &str) -> Result<BTreeSet<String>, TerminalError> {
        let stdout = run_osascript(LIST_SCRIPT)?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|title| title.starts_with(prefix))
            .map(str::to_string)
            .collect())
    }

    fn close_all(&self, labels: &BTreeSet<String>) -> Vec<(String, Result<(), TerminalError>)> {
        labels
            .iter()
            .map(|label| {
                let script = CLOSE_SCRIPT.replace("{label}", &applescript_escape(label));
                (label.clone(), run_osascript(&script).map(|_| ()))
            })
            .collect()
    }
}

#[cfg(not(target_os = "macos"))]
impl WindowController for TerminalAppWindows {
    fn open(&self, _label: &str, _command: &str) -> Result<(), TerminalError> {
        Err(TerminalError::unsupported())
    }

    fn list_labels_with_prefix(&self, _prefix: &str) -> Result<BTreeSet<String>, TerminalError> {
        Err(TerminalError::unsupported())
    }

    fn close_all(&self, labels: &BTreeSet<String>) -> Vec<(String, Result<(), TerminalError>)> {
        labels
            .iter()
            .map(|label| (label.clone(), Err(TerminalError::unsupported())))
            .collect()
    }
}
