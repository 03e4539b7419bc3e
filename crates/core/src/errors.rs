//! Core error types for the Onyx application.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the Onyx core.
///
/// The engines themselves never fail: unresolvable references degrade to
/// defaults and every ratio guards its denominator. Errors only arise at
/// the consumed storage boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// An operation was invoked without an authenticated owner. This is
    /// the single hard error class at the core's consumed boundary.
    #[error("Operation requires an authenticated owner")]
    Unauthorized,

    /// A repository operation failed (record not found, storage failure).
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
