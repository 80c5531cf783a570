use crate::errors::ResumeError;

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Window control is not supported on this platform ({platform})")]
    Unsupported { platform: &'static str },

    #[error("Failed to spawn osascript: {message}")]
    SpawnFailed { message: String },

    #[error("AppleScript failed with error: {stderr}")]
    OsascriptFailed { stderr: String },

    #[error("IO error during window operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl TerminalError {
    pub(crate) fn unsupported() -> Self {
        TerminalError::Unsupported {
            platform: std::env::consts::OS,
        }
    }
}

impl ResumeError for TerminalError {
    fn error_code(&self) -> &'static str {
        match self {
            TerminalError::Unsupported { .. } => "WINDOW_CONTROL_UNSUPPORTED",
            TerminalError::SpawnFailed { .. } => "OSASCRIPT_SPAWN_FAILED",
            TerminalError::OsascriptFailed { .. } => "OSASCRIPT_FAILED",
            TerminalError::IoError { .. } => "TERMINAL_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, TerminalError::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osascript_failed_display() {
        let error = TerminalError::OsascriptFailed {
            stderr: "execution error: Terminal got an error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "AppleScript failed with error: execution error: Terminal got an error"
        );
        assert_eq!(error.error_code(), "OSASCRIPT_FAILED");
    }

    #[test]
    fn test_unsupported_names_platform() {
        let error = TerminalError::unsupported();
        assert!(error.to_string().contains(std::env::consts::OS));
        assert!(error.is_user_error());
    }
}
