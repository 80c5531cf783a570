//! Session data model and per-session outcome reporting.

/// Namespace prefix scoping this tool's tmux sessions away from unrelated
/// ones. Every remote session we create or recognize is named
/// `resume-<name>`; everything else is invisible.
pub const SESSION_PREFIX: &str = "resume-";

/// The remote tmux session name for a user-chosen session name.
///
/// Pure function of `name`: prefix concatenation only, so distinct valid
/// names never collide and the result doubles as the local window label.
pub fn remote_session_id(name: &str) -> String {
    format!("{SESSION_PREFIX}{name}")
}

/// One named unit of remote work, as reported by the remote host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Session {
    /// User-chosen name, unique within the namespace (prefix stripped).
    pub name: String,
    /// Whether the remote multiplexer reports a live client attached.
    pub attached: bool,
}

impl Session {
    pub fn remote_session_id(&self) -> String {
        remote_session_id(&self.name)
    }
}

/// What a multi-session operation did to one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeAction {
    Resumed,
    Detached,
    Removed,
}

impl std::fmt::Display for OutcomeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeAction::Resumed => write!(f, "resumed"),
            OutcomeAction::Detached => write!(f, "detached"),
            OutcomeAction::Removed => write!(f, "removed"),
        }
    }
}

/// Per-session result of a multi-session operation.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub name: String,
    pub action: OutcomeAction,
    pub error: Option<String>,
}

impl SessionOutcome {
    pub fn succeeded(name: impl Into<String>, action: OutcomeAction) -> Self {
        Self {
            name: name.into(),
            action,
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, action: OutcomeAction, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action,
            error: Some(error.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Ordered per-session outcomes of one multi-session operation.
///
/// Individual failures never abort the remaining sessions; the report
/// carries all of them so the CLI can render a summary and pick an exit
/// code.
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    pub outcomes: Vec<SessionOutcome>,
}

impl ReconcileReport {
    pub fn push(&mut self, outcome: SessionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn succeeded_names(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_failure())
            .map(|o| o.name.as_str())
            .collect()
    }
}

/// What Resume(name) found before opening the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeSummary {
    /// The remote session already existed (no create was issued).
    pub existed: bool,
    /// The remote session was already attached at query time.
    pub was_attached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_session_id_is_prefixed() {
        assert_eq!(remote_session_id("web"), "resume-web");
        assert_eq!(remote_session_id("api-2"), "resume-api-2");
    }

    #[test]
    fn test_remote_session_id_injective_over_names() {
        // Prefixing a fixed string preserves distinctness.
        let names = ["web", "api", "web2", "w", "eb"];
        for a in names {
            for b in names {
                if a != b {
                    assert_ne!(remote_session_id(a), remote_session_id(b));
                }
            }
        }
    }

    #[test]
    fn test_session_remote_id_matches_free_function() {
        let session = Session {
            name: "web".to_string(),
            attached: true,
        };
        assert_eq!(session.remote_session_id(), remote_session_id("web"));
    }

    #[test]
    fn test_report_failure_accounting() {
        let mut report = ReconcileReport::default();
        assert!(report.is_empty());
        assert!(!report.has_failures());

        report.push(SessionOutcome::succeeded("web", OutcomeAction::Detached));
        report.push(SessionOutcome::failed(
            "api",
            OutcomeAction::Detached,
            "ssh exited with 255",
        ));

        assert_eq!(report.len(), 2);
        assert_eq!(report.failed_count(), 1);
        assert!(report.has_failures());
        assert_eq!(report.succeeded_names(), vec!["web"]);
    }

    #[test]
    fn test_outcome_action_display() {
        assert_eq!(OutcomeAction::Resumed.to_string(), "resumed");
        assert_eq!(OutcomeAction::Detached.to_string(), "detached");
        assert_eq!(OutcomeAction::Removed.to_string(), "removed");
    }
}
