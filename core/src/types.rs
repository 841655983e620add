//! Domain DTOs for the bird API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently,
//! so the client core does not pull in Axum. The integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single bird returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bird {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
}

/// Request payload for creating a new bird. All three fields are required by
/// the server and must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBird {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
}
