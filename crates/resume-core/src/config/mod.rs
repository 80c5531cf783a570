//! # Configuration System
//!
//! Single JSON config file holding the remote host identity.
//!
//! ## Location
//!
//! `<config_dir>/resume/config.json`, i.e. `~/.config/resume/config.json`
//! on Linux and `~/Library/Application Support/resume/config.json` on macOS.
//!
//! ## Format
//!
//! ```json
//! {
//!   "ssh_host": "user@hostname",
//!   "ssh_agent_forwarding": false
//! }
//! ```
//!
//! A missing file is not an error: it loads as the default (empty) config.
//! Every remote-touching operation requires `ssh_host` to be set and fails
//! with `HostNotConfigured` otherwise.

pub mod store;
pub mod types;

pub use store::{config_path, load_config, save_config};
pub use types::ResumeConfig;
