//! Error types for the todo API client.
//!
//! # Design
//! Failures the server classifies (`exc_type` in the error body) get their
//! own variants so callers can tell a bad request from a missing record from
//! a storage outage. Anything else lands in `HttpError` with the raw status
//! code and body for debugging.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the call's parameters (`ValidationError`).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced todo does not exist (`NotFoundError`, or a bare 404).
    #[error("resource not found")]
    NotFound,

    /// The server's record store failed (`StoreError`).
    #[error("store error: {0}")]
    Store(String),

    /// The server returned an unexpected status without a recognised error body.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
