//! HTTP routes for the bird API.
//!
//! Every route lives under `/api/v1`. Handlers return `Result<_, BirdError>`
//! and let `BirdError`'s `IntoResponse` pick the status code.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::BirdError;
use crate::store::BirdStore;
use crate::types::{Bird, CreateBird};

pub type Db = Arc<RwLock<BirdStore>>;

#[derive(Debug, Deserialize)]
pub struct BirdQuery {
    pub id: Option<String>,
}

/// Build the router around an existing store.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/v1/bird", get(get_bird).post(create_bird))
        .route("/api/v1/bird/ids", get(list_bird_ids))
        .route("/api/v1/allbirds", get(list_birds))
        .fallback(not_found)
        .with_state(db)
}

async fn create_bird(
    State(db): State<Db>,
    body: Bytes,
) -> Result<(StatusCode, Json<Bird>), BirdError> {
    let input = CreateBird::from_body(&body)
        .and_then(CreateBird::validate)
        .inspect_err(|e| tracing::debug!(error = %e, "rejected bird payload"))?;

    let bird = db.write().await.create(input)?;
    tracing::info!(id = %bird.id, name = %bird.name, "bird created");
    Ok((StatusCode::CREATED, Json(bird)))
}

async fn get_bird(
    State(db): State<Db>,
    Query(query): Query<BirdQuery>,
) -> Result<Json<Bird>, BirdError> {
    let id = match query.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(BirdError::validation("query parameter `id` is required")),
    };

    let bird = db.read().await.get(&id);
    if bird.is_err() {
        tracing::debug!(%id, "bird not found");
    }
    bird.map(Json)
}

async fn list_birds(State(db): State<Db>) -> Json<Vec<Bird>> {
    Json(db.read().await.list_all())
}

async fn list_bird_ids(State(db): State<Db>) -> Json<Vec<String>> {
    Json(db.read().await.list_ids())
}

async fn not_found(uri: Uri) -> BirdError {
    tracing::debug!(%uri, "no route");
    BirdError::NotFound
}
