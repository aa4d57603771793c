//! # NZ Walks Backend
//!
//! A REST API over regions, walks and walk difficulties.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (axum handlers, validation, DTO mapping)
//!     ↓
//! Domain Layer (models, services)
//!     ↓
//! Storage Layer (storage traits, SQLite repositories)
//! ```
//!
//! Transfer objects live in the `shared` crate so clients can depend on them
//! without pulling in the server.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{RegionService, WalkDifficultyService, WalkService};
use crate::storage::{DbConnection, RegionRepository, WalkDifficultyRepository, WalkRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub region_service: RegionService,
    pub walk_service: WalkService,
    pub walk_difficulty_service: WalkDifficultyService,
}

impl AppState {
    pub fn new(
        region_service: RegionService,
        walk_service: WalkService,
        walk_difficulty_service: WalkDifficultyService,
    ) -> Self {
        Self {
            region_service,
            walk_service,
            walk_difficulty_service,
        }
    }

    /// Wire every service to its SQLite repository on `db`
    pub fn from_connection(db: DbConnection) -> Self {
        Self::new(
            RegionService::new(Arc::new(RegionRepository::new(db.clone()))),
            WalkService::new(Arc::new(WalkRepository::new(db.clone()))),
            WalkDifficultyService::new(Arc::new(WalkDifficultyRepository::new(db))),
        )
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::from_connection(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    io::router().layer(cors).with_state(app_state)
}
