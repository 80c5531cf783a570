//! Local terminal window control.
//!
//! The session engine only depends on the [`WindowController`] label
//! contract: every window this tool opens carries a label equal to the
//! remote session id, and windows are found and closed by exact label match.
//! [`TerminalAppWindows`] implements the contract for macOS Terminal.app via
//! AppleScript tab custom titles; other platforms report `Unsupported`.

pub mod controller;
pub mod errors;
pub mod terminal_app;

pub use controller::WindowController;
pub use errors::TerminalError;
pub use terminal_app::TerminalAppWindows;
