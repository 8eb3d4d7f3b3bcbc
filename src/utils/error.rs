//! Error types for the frame animator.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for settings and paths.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// Path does not exist
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotDirectory(PathBuf),
}

/// Main error type for the frame animator.
#[derive(Error, Debug, Serialize)]
pub enum AnimatorError {
    /// Settings or path validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The image scaler cannot run on this host
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The external scaler exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    Subprocess {
        program: String,
        status: String,
        stderr: String,
    },

    /// A frame file name has no usable sort key
    #[error("Cannot derive frame index from '{0}'")]
    Parse(String),

    /// A frame file could not be decoded
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// No frames matched in the source directory
    #[error("No frames matching '{pattern}' in {dir}")]
    EmptyInput { dir: PathBuf, pattern: String },

    /// GIF encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for animator operations.
pub type AnimatorResult<T> = Result<T, AnimatorError>;

// Helper methods for error creation
impl AnimatorError {
    pub fn precondition<T: Into<String>>(msg: T) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn parse<T: Into<String>>(file_name: T) -> Self {
        Self::Parse(file_name.into())
    }

    pub fn decode(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn settings<T: Into<String>>(msg: T) -> Self {
        Self::Validation(ValidationError::settings(msg))
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotDirectory(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to AnimatorError
impl From<io::Error> for AnimatorError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to AnimatorError
impl From<PathError> for AnimatorError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_nests_under_validation() {
        let err: AnimatorError = PathError::NotFound(PathBuf::from("output")).into();
        assert!(matches!(
            err,
            AnimatorError::Validation(ValidationError::Path(PathError::NotFound(_)))
        ));
        assert_eq!(err.to_string(), "Validation error: Path error: Not found: output");
    }

    #[test]
    fn test_subprocess_message_includes_stderr() {
        let err = AnimatorError::Subprocess {
            program: "convert".into(),
            status: "exit status: 1".into(),
            stderr: "no images defined".into(),
        };
        assert_eq!(err.to_string(), "convert exited with exit status: 1: no images defined");
    }

    #[test]
    fn test_errors_serialize() {
        let err = AnimatorError::parse("abc.png");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"Parse":"abc.png"}"#);
    }
}
