use thiserror::Error;

/// Failures of the running application, outside any single inventory request.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Service task failed: {0}")]
    ServiceTask(String),
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
