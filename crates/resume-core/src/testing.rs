//! Scripted collaborators for engine tests.
//!
//! `ScriptedRunner` records every remote command and replays queued
//! responses; `RecordingWindows` records window requests. Both use interior
//! mutability because the production traits take `&self`.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};

use crate::remote::{RemoteError, RemoteOutput, RemoteRunner};
use crate::terminal::{TerminalError, WindowController};

pub(crate) struct ScriptedRunner {
    commands: RefCell<Vec<String>>,
    responses: RefCell<VecDeque<Result<RemoteOutput, RemoteError>>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            responses: RefCell::new(VecDeque::new()),
        }
    }

    /// Queue the response for the next command. Commands beyond the queue
    /// succeed with empty output.
    pub(crate) fn push_response(&self, response: Result<RemoteOutput, RemoteError>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Queue a successful listing response for the given `(name, attached)`
    /// pairs, in tmux wire format.
    pub(crate) fn push_listing(&self, sessions: &[(&str, bool)]) {
        let stdout: String = sessions
            .iter()
            .map(|(name, attached)| {
                format!("resume-{}:{}\n", name, if *attached { 1 } else { 0 })
            })
            .collect();
        self.push_response(Ok(RemoteOutput::ok(stdout)));
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl RemoteRunner for ScriptedRunner {
    fn run(&self, command: &str) -> Result<RemoteOutput, RemoteError> {
        self.commands.borrow_mut().push(command.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RemoteOutput::ok("")))
    }
}

#[derive(Default)]
pub(crate) struct RecordingWindows {
    opened: RefCell<Vec<(String, String)>>,
    closed: RefCell<Vec<String>>,
    open_labels: RefCell<BTreeSet<String>>,
    failing_labels: RefCell<BTreeSet<String>>,
}

impl RecordingWindows {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make `open` fail for windows with this label.
    pub(crate) fn fail_open_for(&self, label: &str) {
        self.failing_labels.borrow_mut().insert(label.to_string());
    }

    /// Pretend a window with this label is already open.
    pub(crate) fn set_open(&self, label: &str) {
        self.open_labels.borrow_mut().insert(label.to_string());
    }

    /// `(label, command)` pairs passed to `open`, in order.
    pub(crate) fn opened(&self) -> Vec<(String, String)> {
        self.opened.borrow().clone()
    }

    /// Labels passed to `close_all`, in order.
    pub(crate) fn closed(&self) -> Vec<String> {
        self.closed.borrow().clone()
    }
}

impl WindowController for RecordingWindows {
    fn open(&self, label: &str, command: &str) -> Result<(), TerminalError> {
        if self.failing_labels.borrow().contains(label) {
            return Err(TerminalError::SpawnFailed {
                message: format!("scripted failure for '{label}'"),
            });
        }
        self.opened
            .borrow_mut()
            .push((label.to_string(), command.to_string()));
        self.open_labels.borrow_mut().insert(label.to_string());
        Ok(())
    }

    fn list_labels_with_prefix(&self, prefix: &str) -> Result<BTreeSet<String>, TerminalError> {
        Ok(self
            .open_labels
            .borrow()
            .iter()
            .filter(|label| label.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn close_all(&self, labels: &BTreeSet<String>) -> Vec<(String, Result<(), TerminalError>)> {
        labels
            .iter()
            .map(|label| {
                self.closed.borrow_mut().push(label.clone());
                self.open_labels.borrow_mut().remove(label);
                (label.clone(), Ok(()))
            })
            .collect()
    }
}
