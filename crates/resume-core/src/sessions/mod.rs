//! Session reconciliation and lifecycle engine.
//!
//! Maps between the sessions the user asked for, the tmux sessions that
//! exist on the remote host, and the local terminal windows that are open,
//! and issues the minimal remote/local actions to reconcile them.
//!
//! Every operation re-queries the remote host; nothing is cached across
//! invocations or across steps within one invocation. One remote round trip
//! per logical action, one session at a time.

pub mod attach;
pub mod clear;
pub mod colors;
pub mod detach;
pub mod errors;
pub mod handler;
pub mod list;
pub mod registry;
pub mod remove;
pub mod resume;
pub mod resume_all;
pub mod types;
pub mod validation;
pub(crate) mod windows;
