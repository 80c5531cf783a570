//! List sessions: a pure read of the registry.

use tracing::info;

use crate::remote::RemoteRunner;
use crate::sessions::{errors::SessionError, registry, types::Session};

pub fn list_sessions<R: RemoteRunner>(runner: &R) -> Result<Vec<Session>, SessionError> {
    info!(event = "core.session.list_started");

    let sessions = registry::list_remote_sessions(runner)?;

    info!(
        event = "core.session.list_completed",
        count = sessions.len()
    );

    Ok(sessions)
}
