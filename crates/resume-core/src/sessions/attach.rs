//! Attach command construction.
//!
//! Builds the interactive SSH command a local terminal window runs to attach
//! to a session. Session names are validated before they reach this module,
//! so interpolation is safe.

use crate::sessions::types::remote_session_id;

/// Shared directory for the forwarded agent socket on the remote host.
/// Removed by ClearAll.
pub const AGENT_SOCK_DIR: &str = "/tmp/resume";

/// Single shared symlink for the forwarded SSH agent socket. Every new
/// connection refreshes it, so all sessions automatically pick up a working
/// agent socket.
pub const AGENT_SOCK: &str = "/tmp/resume/agent.sock";

/// Interactive command for the local window: `ssh -t` into the host and
/// attach to the session under a login shell.
pub fn build_attach_command(host: &str, name: &str, agent_forwarding: bool) -> String {
    let session_id = remote_session_id(name);
    let agent_flag = if agent_forwarding { " -A" } else { "" };
    let setup = if agent_forwarding {
        format!(
            "mkdir -p {AGENT_SOCK_DIR} && \
             ln -sf $SSH_AUTH_SOCK {AGENT_SOCK} && \
             export SSH_AUTH_SOCK={AGENT_SOCK} && \
             tmux set-environment -t {session_id} SSH_AUTH_SOCK {AGENT_SOCK} && "
        )
    } else {
        String::new()
    };

    format!(r#"ssh -t{agent_flag} {host} '$SHELL -lc "{setup}tmux attach -t {session_id}"'"#)
}
