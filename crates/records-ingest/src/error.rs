//! Error types for opening line sources.

use std::path::PathBuf;

use records_model::{Diagnostic, DiagnosticKind};
use thiserror::Error;

/// Errors that can occur while opening a line source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File does not exist.
    #[error("{path}: file does not exist")]
    FileNotFound { path: PathBuf },

    /// File exists but cannot be opened by this user.
    #[error("{path}: do not have permission to open this file")]
    PermissionDenied { path: PathBuf },

    /// Any other open failure.
    #[error("{path}: encountered an unknown error when opening this file: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Classifies an [`std::io::Error`] raised while opening `path`.
    pub fn from_open(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::FileOpen { path, source },
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::FileNotFound { path }
            | Self::PermissionDenied { path }
            | Self::FileOpen { path, .. } => path,
        }
    }

    /// The failure without the path prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::FileNotFound { .. } => "file does not exist".to_string(),
            Self::PermissionDenied { .. } => "do not have permission to open this file".to_string(),
            Self::FileOpen { source, .. } => {
                format!("encountered an unknown error when opening this file: {source}")
            }
        }
    }

    /// Converts into a whole-source diagnostic tagged with the path.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::SourceOpen, self.reason())
            .in_source(self.path().display().to_string())
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
