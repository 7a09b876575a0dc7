//! Error types for cursor-pager
//!
//! The taxonomy is narrow on purpose: the pager is a pure in-memory state
//! object, so everything here is either a caller programming error or a
//! failure to restore state from externally supplied query parameters.
//! Transport and server failures belong to the fetch collaborator and never
//! reach this crate.

use thiserror::Error;

/// The main error type for cursor-pager
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Precondition Errors
    // ============================================================================
    /// Backward navigation was requested with no cursor history to pop
    #[error("Cannot retreat: cursor history is empty")]
    EmptyHistory,

    /// A page size of zero was supplied
    #[error("Invalid page size {size}: must be a positive integer")]
    InvalidPageSize {
        /// The rejected value
        size: u32,
    },

    // ============================================================================
    // Query Restore Errors
    // ============================================================================
    /// A mirrored query parameter could not be interpreted
    #[error("Invalid query parameter '{param}': {message}")]
    QueryParam {
        /// The offending parameter name
        param: String,
        /// Why it was rejected
        message: String,
    },

    /// A filter name outside the closed set was supplied
    #[error("Unknown filter name: {name}")]
    UnknownFilter {
        /// The unrecognized name
        name: String,
    },
}

impl Error {
    /// Create an invalid page size error
    pub fn invalid_page_size(size: u32) -> Self {
        Self::InvalidPageSize { size }
    }

    /// Create a query parameter error
    pub fn query_param(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueryParam {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an unknown filter error
    pub fn unknown_filter(name: impl Into<String>) -> Self {
        Self::UnknownFilter { name: name.into() }
    }

    /// Check if this error is a caller precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyHistory | Self::InvalidPageSize { .. })
    }
}

/// Result type alias for cursor-pager
pub type Result<T> = std::result::Result<T, Error>;
