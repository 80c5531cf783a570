use crate::errors::ResumeError;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Failed to spawn ssh: {message}")]
    SpawnFailed { message: String },

    #[error("IO error during remote command: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ResumeError for RemoteError {
    fn error_code(&self) -> &'static str {
        match self {
            RemoteError::SpawnFailed { .. } => "REMOTE_SPAWN_FAILED",
            RemoteError::IoError { .. } => "REMOTE_IO_ERROR",
        }
    }
}
