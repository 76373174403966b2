//! Error type shared by all operations.
//!
//! Operations return `Result<_, AuditError>` so failures travel as values;
//! the output layer turns them into an `{"error": ...}` shaped report.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// Referenced component has no directory under the components root.
    #[error("Component '{component}' not found")]
    NotFound { component: String },

    /// Dashboard requested with zero components.
    #[error("No components found")]
    EmptyInput,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error-shaped result handed to callers instead of a successful payload.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl AuditError {
    pub fn not_found(component: impl Into<String>) -> Self {
        AuditError::NotFound {
            component: component.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
        }
    }
}
