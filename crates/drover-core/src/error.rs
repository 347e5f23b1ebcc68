//! Error types for drover

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for drover operations
pub type DroverResult<T> = Result<T, DroverError>;

/// Main error type for drover
#[derive(Error, Debug, Clone)]
pub enum DroverError {
    /// Invalid command-line invocation
    #[error("{0}")]
    Usage(String),

    /// Instruction file missing or unreadable
    #[error("Error reading instructions file '{}': {message}", .path.display())]
    InstructionFile { path: PathBuf, message: String },

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures surfaced by the external engine
    #[error("Engine error: {0}")]
    Engine(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The run was interrupted before the engine finished
    #[error("Run was interrupted")]
    Interrupted,

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl DroverError {
    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a new instruction-file error naming the offending path
    pub fn instruction_file(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::InstructionFile {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new engine error
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }

    /// True for errors detected locally before the engine is involved
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Usage(_) | Self::InstructionFile { .. } | Self::Config(_)
        )
    }
}

impl From<anyhow::Error> for DroverError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<std::io::Error> for DroverError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for DroverError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_file_error_names_path() {
        let err = DroverError::instruction_file("missing.txt", "No such file or directory");
        let rendered = err.to_string();
        assert!(rendered.contains("missing.txt"));
        assert!(rendered.contains("No such file or directory"));
    }

    #[test]
    fn test_local_errors() {
        assert!(DroverError::usage("bad args").is_local());
        assert!(DroverError::config("bad config").is_local());
        assert!(DroverError::instruction_file("x", "y").is_local());
        assert!(!DroverError::engine("boom").is_local());
        assert!(!DroverError::Interrupted.is_local());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DroverError = io.into();
        assert!(matches!(err, DroverError::Io(_)));
    }
}
