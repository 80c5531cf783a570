//! Session name validation.
//!
//! Names are interpolated into remote shell commands and AppleScript, so the
//! whitelist is strict: ASCII letters, digits, hyphen, underscore. Rejecting
//! everything else (including non-ASCII that could collide after
//! normalization) happens before any remote traffic.

use crate::sessions::errors::SessionError;

pub fn validate_session_name(name: &str) -> Result<&str, SessionError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid {
        return Err(SessionError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok(name)
}
