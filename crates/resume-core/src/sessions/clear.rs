//! Clear every session in the namespace.
//!
//! Remove's two steps (kill, then best-effort window close) for each session
//! regardless of attached state. Individual failures are reported, never
//! fatal to the remaining sessions.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::remote::RemoteRunner;
use crate::sessions::{
    attach::AGENT_SOCK_DIR,
    errors::SessionError,
    registry,
    types::{OutcomeAction, ReconcileReport, SessionOutcome},
};
use crate::terminal::WindowController;

pub fn clear_all_sessions<R: RemoteRunner, W: WindowController>(
    runner: &R,
    windows: &W,
) -> Result<ReconcileReport, SessionError> {
    info!(event = "core.session.clear_all_started");

    let sessions = registry::list_remote_sessions(runner)?;
    let mut report = ReconcileReport::default();

    for session in &sessions {
        let session_id = session.remote_session_id();
        let mut failures: Vec<String> = Vec::new();

        let command = format!("tmux kill-session -t {session_id}");
        match runner.run(&command) {
            Ok(output) if output.success => {}
            Ok(output) => failures.push(format!("kill: {}", output.stderr.trim())),
            Err(e) => failures.push(format!("kill: {e}")),
        }

        let labels: BTreeSet<String> = [session_id].into_iter().collect();
        for (label, result) in windows.close_all(&labels) {
            if let Err(e) = result {
                warn!(
                    event = "core.session.clear_close_failed",
                    label = %label,
                    error = %e
                );
                failures.push(format!("close: {e}"));
            }
        }

        report.push(if failures.is_empty() {
            SessionOutcome::succeeded(&session.name, OutcomeAction::Removed)
        } else {
            SessionOutcome::failed(&session.name, OutcomeAction::Removed, failures.join("; "))
        });
    }

    // Everything in the namespace was just killed; any window still labeled
    // with the prefix is stale by definition.
    super::windows::close_stale_windows(windows, &BTreeSet::new());

    // The shared agent socket directory goes with the last session.
    if !sessions.is_empty() {
        match runner.run(&format!("rm -rf {AGENT_SOCK_DIR}")) {
            Ok(output) if output.success => {}
            Ok(output) => {
                warn!(
                    event = "core.session.clear_socket_cleanup_failed",
                    stderr = output.stderr.trim()
                );
            }
            Err(e) => {
                warn!(
                    event = "core.session.clear_socket_cleanup_failed",
                    error = %e
                );
            }
        }
    }

    info!(
        event = "core.session.clear_all_completed",
        removed = report.len() - report.failed_count(),
        failed = report.failed_count()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteOutput;
    use crate::sessions::registry::LIST_SESSIONS_CMD;
    use crate::testing::{RecordingWindows, ScriptedRunner};

    #[test]
    fn test_clears_every_session_regardless_of_attachment() {
        let runner = ScriptedRunner::new();
        let windows = RecordingWindows::new();
        windows.set_open("resume-web");
        windows.set_open("resume-api");
        runner.push_listing(&[("web", true), ("api", false)]);

        let report = clear_all_sessions(&runner, &windows).unwrap();

        assert_eq!(report.len(), 2);
        assert!(!report.has_failures());

        let commands = runner.commands();
        assert_eq!(commands[0], LIST_SESSIONS_CMD);
        assert_eq!(commands[1], "tmux kill-session -t resume-api");
        assert_eq!(commands[2], "tmux kill-session -t resume-web");
        assert_eq!(commands[3], "rm -rf /tmp/resume");
        assert_eq!(
            windows.closed(),
            vec!["resume-api".to_string(), "resume-web".to_string()]
        );
    }

    #[test]
    fn test_clear_on_empty_registry_does_nothing() {
        let runner = ScriptedRunner::new();
        let windows = RecordingWindows::new();
        runner.push_listing(&[]);

        let report = clear_all_sessions(&runner, &windows).unwrap();
        assert!(report.is_empty());

        // No kill, no socket cleanup: just the registry read.
        assert_eq!(runner.commands(), vec![LIST_SESSIONS_CMD.to_string()]);
    }

    #[test]
    fn test_clear_sweeps_windows_even_with_no_sessions() {
        let runner = ScriptedRunner::new();
        let windows = RecordingWindows::new();
        windows.set_open("resume-zombie");
        runner.push_listing(&[]);

        let report = clear_all_sessions(&runner, &windows).unwrap();
        assert!(report.is_empty());
        assert_eq!(windows.closed(), vec!["resume-zombie".to_string()]);
    }

    #[test]
    fn test_one_kill_failure_still_clears_the_rest() {
        let runner = ScriptedRunner::new();
        let windows = RecordingWindows::new();
        runner.push_listing(&[("api", false), ("web", false)]);
        runner.push_response(Ok(RemoteOutput::failed("session not found: resume-api")));

        let report = clear_all_sessions(&runner, &windows).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report.failed_count(), 1);
        assert!(report.outcomes[0].is_failure());
        assert_eq!(report.succeeded_names(), vec!["web"]);

        // Both windows still closed, socket dir still cleaned up.
        assert_eq!(windows.closed().len(), 2);
        assert!(runner.commands().contains(&"rm -rf /tmp/resume".to_string()));
    }

    #[test]
    fn test_clear_followed_by_list_reports_zero_sessions() {
        let runner = ScriptedRunner::new();
        let windows = RecordingWindows::new();
        runner.push_listing(&[("web", true)]);

        clear_all_sessions(&runner, &windows).unwrap();

        // The remote host now has nothing in the namespace.
        runner.push_listing(&[]);
        let sessions = crate::sessions::list::list_sessions(&runner).unwrap();
        assert!(sessions.is_empty());
    }
}
