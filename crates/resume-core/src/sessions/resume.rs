//! Resume one named session.
//!
//! Creates the remote session only if it is absent, then asks the window
//! controller for a window attached to it. After the create the engine
//! proceeds optimistically to the window-open step without re-querying the
//! registry.

use tracing::{info, warn};

use crate::config::ResumeConfig;
use crate::remote::RemoteRunner;
use crate::sessions::{
    attach, colors,
    errors::SessionError,
    registry,
    types::{ResumeSummary, remote_session_id},
    validation,
};
use crate::terminal::WindowController;

pub fn resume_session<R: RemoteRunner, W: WindowController>(
    runner: &R,
    windows: &W,
    config: &ResumeConfig,
    name: &str,
) -> Result<ResumeSummary, SessionError> {
    validation::validate_session_name(name)?;
    config.require_host()?;

    info!(event = "core.session.resume_started", name = name);

    let sessions = registry::list_remote_sessions(runner)?;
    let summary = match sessions.iter().find(|s| s.name == name) {
        Some(session) => ResumeSummary {
            existed: true,
            was_attached: session.attached,
        },
        None => {
            create_remote_session(runner, config, name)?;
            ResumeSummary {
                existed: false,
                was_attached: false,
            }
        }
    };

    open_session_window(windows, config, name)?;

    info!(
        event = "core.session.resume_completed",
        name = name,
        existed = summary.existed,
        was_attached = summary.was_attached
    );

    Ok(summary)
}

/// Open (or focus) the local window that attaches to `name`.
///
/// Shared with ResumeAllDetached, which skips the create step because the
/// session already exists by definition.
pub(crate) fn open_session_window<W: WindowController>(
    windows: &W,
    config: &ResumeConfig,
    name: &str,
) -> Result<(), SessionError> {
    let host = config.require_host()?;
    let session_id = remote_session_id(name);
    let command = attach::build_attach_command(host, name, config.ssh_agent_forwarding);
    windows.open(&session_id, &command)?;
    Ok(())
}

fn create_remote_session<R: RemoteRunner>(
    runner: &R,
    config: &ResumeConfig,
    name: &str,
) -> Result<(), SessionError> {
    let session_id = remote_session_id(name);
    let env_opt = if config.ssh_agent_forwarding {
        format!(" -e SSH_AUTH_SOCK={}", attach::AGENT_SOCK)
    } else {
        String::new()
    };

    let command = format!("tmux new-session -d -s {session_id}{env_opt}");
    let output = runner.run(&command)?;
    if !output.success {
        // Another actor creating the session concurrently counts as success;
        // it exists, which is all this step guarantees.
        if output.stderr.contains("duplicate session") {
            info!(
                event = "core.session.create_raced",
                name = name,
                session_id = %session_id
            );
            return Ok(());
        }
        return Err(SessionError::RemoteCommandFailed {
            command,
            message: output.stderr.trim().to_string(),
        });
    }

    info!(
        event = "core.session.create_completed",
        name = name,
        session_id = %session_id
    );

    // Best-effort status bar color so windows are tellable apart.
    let color = colors::status_color(name);
    let style_cmd = format!("tmux set -t {session_id} status-style 'bg={color},fg=black'");
    match runner.run(&style_cmd) {
        Ok(output) if output.success => {}
        Ok(output) => {
            warn!(
                event = "core.session.style_failed",
                name = name,
                stderr = output.stderr.trim()
            );
        }
        Err(e) => {
            warn!(
                event = "core.session.style_failed",
                name = name,
                error = %e
            );
        }
    }

    Ok(())
}
