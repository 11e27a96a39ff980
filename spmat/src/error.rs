//! Error types for file-backed matrix operations

use std::path::PathBuf;

use spmat_core::MatrixError;

/// Errors raised by the spmat shell layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened, mapped or read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not UTF-8 text
    #[error("{} is not valid UTF-8", .path.display())]
    Utf8 { path: PathBuf },
    /// The file text is not a valid matrix
    #[error("Failed to load {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: MatrixError,
    },
    /// An arithmetic operation failed
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// The operation name is not one of add, subtract, multiply
    #[error("Invalid operation {0:?}: expected add, subtract or multiply")]
    UnknownOperation(String),
}

impl Error {
    /// The underlying matrix error, if this failure came from the core
    pub fn matrix_error(&self) -> Option<MatrixError> {
        match self {
            Error::Parse { source, .. } => Some(*source),
            Error::Matrix(err) => Some(*err),
            _ => None,
        }
    }
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, Error>;
