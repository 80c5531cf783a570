//! Detach every attached session and close its local window.
//!
//! Detach is always issued before the close: closing the window first risks
//! leaving the remote session in a hung attach state depending on how the
//! terminal propagates the disconnect. The close still runs when the detach
//! failed, but the failure is reported.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::remote::RemoteRunner;
use crate::sessions::{
    errors::SessionError,
    registry,
    types::{OutcomeAction, ReconcileReport, SessionOutcome},
};
use crate::terminal::WindowController;

pub fn detach_all_sessions<R: RemoteRunner, W: WindowController>(
    runner: &R,
    windows: &W,
) -> Result<ReconcileReport, SessionError> {
    info!(event = "core.session.detach_all_started");

    let sessions = registry::list_remote_sessions(runner)?;
    let mut report = ReconcileReport::default();

    for session in sessions.iter().filter(|s| s.attached) {
        let session_id = session.remote_session_id();
        let mut failures: Vec<String> = Vec::new();

        let command = format!("tmux detach-client -s {session_id}");
        match runner.run(&command) {
            Ok(output) if output.success => {}
            Ok(output) => failures.push(format!("detach: {}", output.stderr.trim())),
            Err(e) => failures.push(format!("detach: {e}")),
        }

        // Best-effort close, even when the detach failed.
        let labels: BTreeSet<String> = [session_id].into_iter().collect();
        for (label, result) in windows.close_all(&labels) {
            if let Err(e) = result {
                warn!(
                    event = "core.session.detach_close_failed",
                    label = %label,
                    error = %e
                );
                failures.push(format!("close: {e}"));
            }
        }

        report.push(if failures.is_empty() {
            SessionOutcome::succeeded(&session.name, OutcomeAction::Detached)
        } else {
            SessionOutcome::failed(&session.name, OutcomeAction::Detached, failures.join("; "))
        });
    }

    // Sweep windows whose sessions are gone entirely; their remote action
    // happened elsewhere, so only the local side needs converging.
    let known: BTreeSet<String> = sessions.iter().map(|s| s.remote_session_id()).collect();
    super::windows::close_stale_windows(windows, &known);

    info!(
        event = "core.session.detach_all_completed",
        detached = report.len() - report.failed_count(),
        failed = report.failed_count()
    );

    Ok(report)
}
