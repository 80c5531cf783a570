//! Re-export facade for session operations.
//!
//! One function per user intent. This file re-exports them to give the CLI a
//! single `session_ops::*` surface.

pub use super::clear::clear_all_sessions;
pub use super::detach::detach_all_sessions;
pub use super::list::list_sessions;
pub use super::remove::remove_session;
pub use super::resume::resume_session;
pub use super::resume_all::resume_detached_sessions;
