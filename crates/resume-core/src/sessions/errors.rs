use crate::errors::ResumeError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid session name: '{name}'. Only letters, numbers, hyphens, and underscores are allowed.")]
    InvalidName { name: String },

    #[error("Session '{name}' not found on remote")]
    NotFound { name: String },

    #[error("Remote host unreachable: {message}")]
    RemoteUnreachable { message: String },

    #[error("Remote command failed: {command}: {message}")]
    RemoteCommandFailed { command: String, message: String },

    #[error("{failed} of {total} session(s) failed")]
    PartialFailure { failed: usize, total: usize },

    #[error("Configuration error: {source}")]
    ConfigError {
        #[from]
        source: crate::errors::ConfigError,
    },

    #[error("Window operation failed: {source}")]
    TerminalError {
        #[from]
        source: crate::terminal::errors::TerminalError,
    },
}

// Connection-level runner failures always mean the host is unreachable.
impl From<crate::remote::errors::RemoteError> for SessionError {
    fn from(source: crate::remote::errors::RemoteError) -> Self {
        SessionError::RemoteUnreachable {
            message: source.to_string(),
        }
    }
}

impl ResumeError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::InvalidName { .. } => "INVALID_SESSION_NAME",
            SessionError::NotFound { .. } => "SESSION_NOT_FOUND",
            SessionError::RemoteUnreachable { .. } => "REMOTE_UNREACHABLE",
            SessionError::RemoteCommandFailed { .. } => "REMOTE_COMMAND_FAILED",
            SessionError::PartialFailure { .. } => "PARTIAL_FAILURE",
            SessionError::ConfigError { .. } => "CONFIG_ERROR",
            SessionError::TerminalError { .. } => "TERMINAL_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidName { .. }
                | SessionError::NotFound { .. }
                | SessionError::ConfigError { .. }
        )
    }
}
