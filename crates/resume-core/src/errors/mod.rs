use std::error::Error;

/// Base trait for all application errors
pub trait ResumeError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type ResumeResult<T> = Result<T, Box<dyn ResumeError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user configuration directory")]
    ConfigDirUnavailable,

    #[error("No SSH host configured. Run: resume --setup")]
    HostNotConfigured,

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("IO error accessing config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ResumeError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigDirUnavailable => "CONFIG_DIR_UNAVAILABLE",
            ConfigError::HostNotConfigured => "HOST_NOT_CONFIGURED",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::HostNotConfigured | ConfigError::ConfigParseError { .. }
        )
    }
}
