use std::process::Command;

use tracing::debug;

use crate::escape::shell_quote;
use crate::remote::errors::RemoteError;

/// Captured result of one remote command round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl RemoteOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Run one command on the remote host and capture its output.
///
/// Implementations must be synchronous: one blocking round trip per call,
/// issued exactly once, no retries.
pub trait RemoteRunner {
    fn run(&self, command: &str) -> Result<RemoteOutput, RemoteError>;
}

/// Production runner: `ssh -o RequestTTY=no <host> "$SHELL -lc '<command>'"`.
///
/// The remote command runs under the user's login shell so tmux installed via
/// Homebrew etc. is on PATH.
#[derive(Debug)]
pub struct SshRunner {
    host: String,
}

impl SshRunner {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl RemoteRunner for SshRunner {
    fn run(&self, command: &str) -> Result<RemoteOutput, RemoteError> {
        debug!(
            event = "core.remote.command_started",
            host = %self.host,
            command = command
        );

        let output = Command::new("ssh")
            .args(["-o", "RequestTTY=no"])
            .arg(&self.host)
            .arg(format!("$SHELL -lc {}", shell_quote(command)))
            .output()
            .map_err(|e| RemoteError::SpawnFailed {
                message: e.to_string(),
            })?;

        let result = RemoteOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        };

        debug!(
            event = "core.remote.command_completed",
            host = %self.host,
            success = result.success
        );

        Ok(result)
    }
}
