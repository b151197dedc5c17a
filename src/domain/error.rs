use thiserror::Error;

/// Setup failures. None of these can be raised from inside an event handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid companion endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    #[error("No tokio runtime available to run deliveries")]
    NoRuntime,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
