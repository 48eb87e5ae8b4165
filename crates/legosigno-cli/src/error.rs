use std::fmt;

use legosigno::LegosignoError;

/// Failure reported by a command, split by who has to act on it.
#[derive(Debug)]
pub enum CliError {
    /// The index, path or answer given by the user does not name a folder
    Usage(String),
    /// Storage, configuration or terminal failure
    Failure(String),
}

impl CliError {
    /// Process exit status: 2 for usage errors, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Failure(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) | CliError::Failure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Failure(s)
    }
}

impl From<&str> for CliError {
    fn from(s: &str) -> Self {
        CliError::Failure(s.to_string())
    }
}

impl From<LegosignoError> for CliError {
    fn from(e: LegosignoError) -> Self {
        match e {
            LegosignoError::InvalidSelection(_) | LegosignoError::NotFound(_) => {
                CliError::Usage(e.to_string())
            }
            other => CliError::Failure(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Failure(format!("JSON error: {e}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Failure(format!("IO error: {e}"))
    }
}

pub type CliResult<T> = Result<T, CliError>;
