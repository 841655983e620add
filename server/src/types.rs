//! Bird record and the request payloads that produce one.
//!
//! # Design
//! `CreateBird` is what arrives on the wire: every field optional so that a
//! body like `{"nonsense":"..."}` still deserializes and can be rejected with
//! a 400 instead of an extractor rejection. `CreateBird::validate` is the only
//! way to obtain a `NewBird`, and only a `NewBird` reaches the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BirdError;

/// A stored bird as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
}

/// Raw creation payload. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBird {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

/// A creation payload that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBird {
    pub name: String,
    pub kind: String,
    pub info: String,
}

impl CreateBird {
    /// Parse a raw request body. An empty body or anything other than a JSON
    /// object is a validation error.
    pub fn from_body(body: &[u8]) -> Result<Self, BirdError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(BirdError::validation("request body is empty"));
        }
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| BirdError::validation(format!("malformed bird payload: {e}")))?;
        if !value.is_object() {
            return Err(BirdError::validation("bird payload must be a JSON object"));
        }
        serde_json::from_value(value)
            .map_err(|e| BirdError::validation(format!("malformed bird payload: {e}")))
    }

    pub fn validate(self) -> Result<NewBird, BirdError> {
        let name = required("name", self.name)?;
        let kind = required("type", self.kind)?;
        let info = required("info", self.info)?;
        Ok(NewBird { name, kind, info })
    }
}

impl NewBird {
    /// Re-checks the non-empty invariant; fields are public so a `NewBird`
    /// can be built without going through `CreateBird::validate`.
    pub(crate) fn check(&self) -> Result<(), BirdError> {
        for (field, value) in [("name", &self.name), ("type", &self.kind), ("info", &self.info)] {
            if value.trim().is_empty() {
                return Err(BirdError::validation(format!("`{field}` must not be empty")));
            }
        }
        Ok(())
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, BirdError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(BirdError::validation(format!("`{field}` must not be empty"))),
        None => Err(BirdError::validation(format!("`{field}` is required"))),
    }
}
