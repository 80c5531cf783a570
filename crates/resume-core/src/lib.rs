//! resume-core: Core library for remote tmux session management
//!
//! This library provides the business logic for reconciling three views of a
//! named session: what the user asked for, the tmux sessions that actually
//! exist on the remote host, and the local terminal windows that are open.
//!
//! # Main Entry Points
//!
//! - [`sessions`] - Resume, list, detach, remove and clear sessions
//! - [`config`] - Configuration management
//! - [`remote`] - Remote command execution over SSH
//! - [`terminal`] - Local terminal window control

pub mod config;
pub mod errors;
pub mod escape;
pub mod events;
pub mod logging;
pub mod remote;
pub mod sessions;
pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types at crate root for convenience
pub use config::ResumeConfig;
pub use remote::{RemoteOutput, RemoteRunner, SshRunner};
pub use sessions::types::{
    OutcomeAction, ReconcileReport, ResumeSummary, Session, SessionOutcome, remote_session_id,
};
pub use terminal::{TerminalAppWindows, WindowController};

// Re-export handler module as the primary API
pub use sessions::handler as session_ops;

// Re-export logging initialization
pub use logging::init_logging;
