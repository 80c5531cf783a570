use std::collections::BTreeSet;

use crate::terminal::errors::TerminalError;

/// Label-addressed local window control.
///
/// The engine never inspects window contents; it only relies on label
/// equality with the remote session id.
pub trait WindowController {
    /// Open a window labeled `label` running `command`.
    ///
    /// This is a single atomic request: the controller owns whether to
    /// create a new window or focus an existing one with the same label, so
    /// repeated opens never stack duplicate windows.
    fn open(&self, label: &str, command: &str) -> Result<(), TerminalError>;

    /// Labels of currently open windows that start with `prefix`.
    fn list_labels_with_prefix(&self, prefix: &str) -> Result<BTreeSet<String>, TerminalError>;

    /// Close every window whose label is in `labels`, best-effort, returning
    /// a per-label result.
    fn close_all(&self, labels: &BTreeSet<String>) -> Vec<(String, Result<(), TerminalError>)>;
}
