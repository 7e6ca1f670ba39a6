//! Error types for CodePointe
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CodePointe operations
pub type CodepointeResult<T> = Result<T, CodepointeError>;

/// Main error type for CodePointe operations
#[derive(Error, Debug)]
pub enum CodepointeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Directory is not an SFDX project (no `.sfdx` marker)
    #[error("not an sfdx project: {path} (missing .sfdx directory)")]
    NotAProject { path: PathBuf },

    /// Path is outside the project it was resolved against
    #[error("path '{path}' is outside project root '{root}'")]
    OutsideProject { path: PathBuf, root: PathBuf },

    /// File watcher could not be started
    #[error("file watcher error: {0}")]
    Watcher(String),
}

impl From<notify::Error> for CodepointeError {
    fn from(err: notify::Error) -> Self {
        CodepointeError::Watcher(err.to_string())
    }
}
