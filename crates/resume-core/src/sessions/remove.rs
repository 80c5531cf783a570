//! Remove one named session.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::remote::RemoteRunner;
use crate::sessions::{errors::SessionError, registry, types::remote_session_id, validation};
use crate::terminal::WindowController;

/// Kill the remote session and close its local window.
///
/// A name with no remote session fails with `NotFound` before any mutation.
/// The window close is best-effort and runs regardless of the kill result;
/// a kill failure still propagates afterwards.
pub fn remove_session<R: RemoteRunner, W: WindowController>(
    runner: &R,
    windows: &W,
    name: &str,
) -> Result<(), SessionError> {
    validation::validate_session_name(name)?;

    info!(event = "core.session.remove_started", name = name);

    let sessions = registry::list_remote_sessions(runner)?;
    if !sessions.iter().any(|s| s.name == name) {
        return Err(SessionError::NotFound {
            name: name.to_string(),
        });
    }

    let session_id = remote_session_id(name);
    let command = format!("tmux kill-session -t {session_id}");
    let kill_result = match runner.run(&command) {
        Ok(output) if output.success => Ok(()),
        Ok(output) => Err(SessionError::RemoteCommandFailed {
            command,
            message: output.stderr.trim().to_string(),
        }),
        Err(e) => Err(e.into()),
    };

    let labels: BTreeSet<String> = [session_id].into_iter().collect();
    for (label, result) in windows.close_all(&labels) {
        if let Err(e) = result {
            warn!(
                event = "core.session.remove_close_failed",
                label = %label,
                error = %e
            );
        }
    }

    if kill_result.is_ok() {
        info!(event = "core.session.remove_completed", name = name);
    }

    kill_result
}
