//! Error types for the autofill core library.
//!
//! The matching engine itself never fails; these errors only surface at the
//! JSON boundary used by the platform bindings.

use thiserror::Error;

/// Errors that can occur while decoding or encoding autofill requests.
///
/// This enum is exposed to Swift/Kotlin via UniFFI as a flat error type,
/// meaning the error variants are exposed as simple enum cases with string messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
#[cfg_attr(feature = "uniffi", uniffi(flat_error))]
pub enum AutofillError {
    /// Error serializing/deserializing JSON
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for AutofillError {
    fn from(err: serde_json::Error) -> Self {
        AutofillError::Json(err.to_string())
    }
}

/// Result type alias for autofill boundary operations.
pub type AutofillResult<T> = Result<T, AutofillError>;
