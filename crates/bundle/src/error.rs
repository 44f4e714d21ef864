//! Bundle Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A bundle error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for bundle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The logical path is not part of the resource set.
    #[display("resource not found: {_0}")]
    ResourceNotFound(#[error(not(source))] String),
    /// The resource is listed but its bytes could not be loaded. A correctly
    /// built binary never does this; treat it as an integrity failure.
    #[display("resource unreadable: {_0}")]
    ResourceReadFailed(#[error(not(source))] String),
    #[display("could not create temporary file")]
    TempFileCreateFailed,
    #[display("could not write temporary file")]
    TempFileWriteFailed,
    #[display("could not close temporary file")]
    TempFileCloseFailed,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::ResourceNotFound("foo.db".to_string()).to_string(), "resource not found: foo.db");
        assert_eq!(ErrorKind::TempFileWriteFailed.to_string(), "could not write temporary file");
    }
}
