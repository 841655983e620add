//! HTTP server for the bird registry.
//!
//! # Overview
//! A small CRUD API over an in-memory store: create a bird, fetch it by id,
//! list every bird, list every id. See [`routes`] for the route table.
//!
//! # Design
//! - [`store::BirdStore`] owns records and id generation.
//! - [`routes`] validates requests and maps [`BirdError`] onto status codes.
//! - [`server::BirdServer`] wraps start/stop around a fresh store per
//!   instance; there is no process-wide state.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod store;
pub mod telemetry;
pub mod types;

pub use config::{ConfigError, ServerConfig};
pub use error::{BirdError, ServerError};
pub use server::{app, BirdServer};
pub use store::BirdStore;
pub use types::{Bird, CreateBird, NewBird};
