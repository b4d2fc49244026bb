//! Error types for sparsedict.

use thiserror::Error;

/// Top-level error type for dictionary and container operations.
///
/// Absence of a key at the dictionary layer is ordinarily signalled with
/// `Option::None`; [`Error::NotFound`] exists for callers that need to
/// surface that absence as an error value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The addressed key is not present.
    #[error("key not found")]
    NotFound,

    /// An index or coordinate lies outside a container's fixed bounds.
    /// Never clamped or ignored; always surfaced to the caller.
    #[error("index {index} out of range for bound {bound}")]
    OutOfRange {
        /// The offending index or coordinate.
        index: usize,
        /// The exclusive bound it violated.
        bound: usize,
    },

    /// A constructor parameter rules out a valid structure.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for sparsedict operations.
pub type Result<T> = std::result::Result<T, Error>;
