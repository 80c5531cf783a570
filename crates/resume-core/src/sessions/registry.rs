//! Session registry: the authoritative view of remote sessions.
//!
//! Never cached. Every call is a fresh round trip parsing the live tmux
//! listing; sessions outside the `resume-` namespace are invisible.

use tracing::debug;

use crate::remote::RemoteRunner;
use crate::sessions::errors::SessionError;
use crate::sessions::types::{SESSION_PREFIX, Session};

/// tmux listing, one `name:attached` pair per line. The `|| true` guard
/// turns "no tmux server running" into an empty listing instead of a
/// failure, so a non-zero exit here means the host itself is unreachable.
pub const LIST_SESSIONS_CMD: &str =
    "tmux list-sessions -F '#{session_name}:#{session_attached}' 2>/dev/null || true";

/// Query the remote host for every session in our namespace, sorted by name.
pub fn list_remote_sessions<R: RemoteRunner>(runner: &R) -> Result<Vec<Session>, SessionError> {
    let output = runner.run(LIST_SESSIONS_CMD)?;
    if !output.success {
        return Err(SessionError::RemoteUnreachable {
            message: if output.stderr.trim().is_empty() {
                "ssh exited with a non-zero status".to_string()
            } else {
                output.stderr.trim().to_string()
            },
        });
    }

    let sessions = parse_listing(&output.stdout);
    debug!(
        event = "core.registry.listed",
        count = sessions.len()
    );
    Ok(sessions)
}

/// Parse the tmux listing into namespace sessions, sorted by name.
///
/// The attached marker is taken after the last colon; `0` means detached,
/// any other value (tmux reports a client count) means attached. Malformed
/// lines and foreign sessions are skipped.
fn parse_listing(stdout: &str) -> Vec<Session> {
    let mut sessions: Vec<Session> = stdout
        .lines()
        .filter_map(|line| {
            let (full_name, attached_marker) = line.trim().rsplit_once(':')?;
            let name = full_name.strip_prefix(SESSION_PREFIX)?;
            Some(Session {
                name: name.to_string(),
                attached: attached_marker != "0",
            })
        })
        .collect();
    sessions.sort();
    sessions
}
