use thiserror::Error;

/// Errors raised by the service itself rather than reported to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown request method '{0}'")]
    UnknownMethod(String),

    #[error("failed to read request body: {0}")]
    BodyRead(#[source] std::io::Error),

    #[error(transparent)]
    Store(#[from] records_model::RecordsError),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
