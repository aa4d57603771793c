//! # REST API Interface Layer
//!
//! HTTP endpoints for regions, walks and walk difficulties. This layer
//! handles:
//! - JSON request/response serialization
//! - Request validation (regions only)
//! - Mapping between transfer objects and domain models
//! - Translating missing entities and storage failures into status codes
//!
//! Each resource module exposes a `router()`; they are merged here.

use axum::Router;

use crate::AppState;

pub mod error;
pub mod health_apis;
pub mod mappers;
pub mod region_apis;
pub mod validation;
pub mod walk_apis;
pub mod walk_difficulty_apis;

#[cfg(test)]
pub mod test_utils;

pub use error::ApiError;

/// All API routes, without state or middleware applied
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(region_apis::router())
        .merge(walk_apis::router())
        .merge(walk_difficulty_apis::router())
        .merge(health_apis::router())
}
