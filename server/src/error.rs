//! Error types for the bird server.
//!
//! `BirdError` is the request-level error: it never escapes a handler and
//! maps straight onto a status code. `ServerError` covers the lifecycle
//! (binding, serving, shutting down) and is what `main` returns.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BirdError {
    /// The request was malformed or missing a required field.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No bird (or no route) matched the request.
    #[error("not found")]
    NotFound,
}

impl BirdError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            BirdError::Validation(_) => StatusCode::BAD_REQUEST,
            BirdError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            BirdError::Validation(_) => "validation_error",
            BirdError::NotFound => "not_found",
        }
    }
}

impl IntoResponse for BirdError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ServerError {
    pub(crate) fn bind(addr: impl ToString, source: std::io::Error) -> Self {
        Self::Bind {
            addr: addr.to_string(),
            source,
        }
    }
}
