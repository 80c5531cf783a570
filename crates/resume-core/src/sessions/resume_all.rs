//! Resume every detached session.
//!
//! The sessions already exist by definition, so only the window-open step of
//! Resume runs, once per detached session. A failure for one session never
//! aborts the rest.

use tracing::{info, warn};

use crate::config::ResumeConfig;
use crate::remote::RemoteRunner;
use crate::sessions::{
    errors::SessionError,
    registry, resume,
    types::{OutcomeAction, ReconcileReport, SessionOutcome},
};
use crate::terminal::WindowController;

pub fn resume_detached_sessions<R: RemoteRunner, W: WindowController>(
    runner: &R,
    windows: &W,
    config: &ResumeConfig,
) -> Result<ReconcileReport, SessionError> {
    config.require_host()?;

    info!(event = "core.session.resume_all_started");

    let sessions = registry::list_remote_sessions(runner)?;
    let mut report = ReconcileReport::default();

    for session in sessions.iter().filter(|s| !s.attached) {
        match resume::open_session_window(windows, config, &session.name) {
            Ok(()) => {
                report.push(SessionOutcome::succeeded(
                    &session.name,
                    OutcomeAction::Resumed,
                ));
            }
            Err(e) => {
                warn!(
                    event = "core.session.resume_all_open_failed",
                    name = %session.name,
                    error = %e
                );
                report.push(SessionOutcome::failed(
                    &session.name,
                    OutcomeAction::Resumed,
                    e.to_string(),
                ));
            }
        }
    }

    info!(
        event = "core.session.resume_all_completed",
        resumed = report.len() - report.failed_count(),
        failed = report.failed_count()
    );

    Ok(report)
}
