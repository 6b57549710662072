use thiserror::Error;

/// Caller-level errors. Data problems are reported as [`crate::Diagnostic`]
/// values instead.
#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A sort style name did not match any known style.
    #[error("invalid sort style '{name}', allowed values are {allowed}")]
    UnknownSortStyle { name: String, allowed: String },

    /// A field list of the wrong length was handed to the validator.
    #[error("fields slice has length {actual} but must be exactly length {expected}")]
    FieldCount { actual: usize, expected: usize },

    #[error("record store lock poisoned")]
    StorePoisoned,
}

pub type Result<T> = std::result::Result<T, RecordsError>;
