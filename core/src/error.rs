//! Error types for the bird API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because they are the
//! two failures the API documents (unknown id or route, and invalid input).
//! Any other unexpected status lands in `HttpError` with the raw status code
//! and body for debugging.

use thiserror::Error;

/// Errors returned by `BirdClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the bird or route does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400: the request was rejected as invalid.
    #[error("bad request: {body}")]
    BadRequest { body: String },

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
