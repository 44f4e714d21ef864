//! Store Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use weblist_bundle::error::{Error as BundleError, ErrorKind as BundleErrorKind};

/// A store error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The database could not be materialized from the resource set.
    #[display("resource error: {_0}")]
    Resource(BundleErrorKind),
    #[display("could not open database")]
    ConnectionOpenFailed,
    #[display("could not execute query")]
    QueryExecutionFailed,
    /// A row did not have the expected shape (e.g. a `NULL` text column).
    #[display("could not decode row")]
    RowDecodeFailed,
    #[display("error while iterating rows")]
    RowIterationFailed,
}
impl ErrorKind {
    /// Convert a bundle error into a store error, preserving the bundle
    /// crate's `Exn` frame as a child in its own error tree.
    #[track_caller]
    pub fn resource(err: BundleError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Resource(inner))
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Resource(kind) => kind.is_retryable(),
            _ => false,
        }
    }
}
