//! Remote command execution over SSH.
//!
//! The [`RemoteRunner`] trait is the seam the session engine depends on; the
//! production implementation is [`SshRunner`]. Connection-level failures are
//! errors, while a remote command exiting non-zero is reported through
//! [`RemoteOutput::success`] so callers can decide what a failure means for
//! their operation.

pub mod errors;
pub mod runner;

pub use errors::RemoteError;
pub use runner::{RemoteOutput, RemoteRunner, SshRunner};
