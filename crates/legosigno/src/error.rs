//! Error types for Legosigno

use thiserror::Error;

/// Main error type for Legosigno operations
#[derive(Error, Debug)]
pub enum LegosignoError {
    /// I/O errors opening, creating or writing storage files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage-related errors (store file, append log)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A visited-folders log line that could not be parsed
    #[error("Malformed visited folders log at line {line}: {reason}")]
    LogParse { line: usize, reason: String },

    /// Folder or index not present in the unified list
    #[error("Not found: {0}")]
    NotFound(String),

    /// Selection typed or passed by the user that cannot be used
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The current working directory could not be determined
    #[error("Unable to get working directory: {0}")]
    WorkingDirectory(String),
}

impl From<serde_json::Error> for LegosignoError {
    fn from(e: serde_json::Error) -> Self {
        LegosignoError::Serialization(e.to_string())
    }
}

/// Result type alias for Legosigno operations
pub type Result<T> = std::result::Result<T, LegosignoError>;
