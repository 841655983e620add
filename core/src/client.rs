//! Stateless HTTP request builder and response parser for the bird API.
//!
//! # Design
//! `BirdClient` holds only a `base_url` and carries no mutable state between
//! calls. Each route has a `build_*` method that produces an `HttpRequest`
//! and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Bird, CreateBird};

const API_PREFIX: &str = "/api/v1";

/// Synchronous, stateless client for the bird API.
#[derive(Debug, Clone)]
pub struct BirdClient {
    base_url: String,
}

impl BirdClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_bird(&self, input: &CreateBird) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url("/bird"),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// The id is placed in the query string as-is; server ids are UUIDs.
    pub fn build_get_bird(&self, id: &str) -> HttpRequest {
        self.get(&format!("/bird?id={id}"))
    }

    pub fn build_list_birds(&self) -> HttpRequest {
        self.get("/allbirds")
    }

    pub fn build_list_bird_ids(&self) -> HttpRequest {
        self.get("/bird/ids")
    }

    pub fn parse_create_bird(&self, response: HttpResponse) -> Result<Bird, ApiError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_get_bird(&self, response: HttpResponse) -> Result<Bird, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_list_birds(&self, response: HttpResponse) -> Result<Vec<Bird>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_list_bird_ids(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest {
            body: response.body.clone(),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
