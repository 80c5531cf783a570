//! Shared string escaping utilities.

/// Escape a string for use in AppleScript.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Single-quote a string for the remote shell.
///
/// Embedded single quotes use the `'"'"'` pattern so the result is safe to
/// interpolate into a larger shell command.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}
