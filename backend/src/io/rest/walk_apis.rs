//! # REST API for Walk Management
//!
//! Walk bodies are stored as submitted; region and difficulty ids are not
//! checked against existing rows.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::mappers::WalkMapper;
use crate::AppState;
use shared::{AddWalkRequest, UpdateWalkRequest, Walk};

/// Create a router for walk related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Walks", get(list_walks).post(create_walk))
        .route("/Walks/:id", get(get_walk).put(update_walk).delete(delete_walk))
}

pub async fn list_walks(State(state): State<AppState>) -> Result<Json<Vec<Walk>>, ApiError> {
    info!("GET /Walks");

    let walks = state.walk_service.list_walks().await?;
    Ok(Json(WalkMapper::to_dto_list(walks)))
}

pub async fn get_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Walk>, ApiError> {
    info!("GET /Walks/{}", id);

    let walk = state
        .walk_service
        .get_walk(id)
        .await?
        .ok_or(ApiError::NotFound("Walk"))?;

    Ok(Json(WalkMapper::to_dto(walk)))
}

pub async fn create_walk(
    State(state): State<AppState>,
    Json(request): Json<AddWalkRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /Walks - request: {:?}", request);

    let walk = state
        .walk_service
        .create_walk(WalkMapper::from_add_request(request))
        .await?;

    let location = format!("/Walks/{}", walk.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WalkMapper::to_dto(walk)),
    ))
}

pub async fn update_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWalkRequest>,
) -> Result<Json<Walk>, ApiError> {
    info!("PUT /Walks/{} - request: {:?}", id, request);

    let walk = state
        .walk_service
        .update_walk(id, WalkMapper::from_update_request(request))
        .await?
        .ok_or(ApiError::NotFound("Walk"))?;

    Ok(Json(WalkMapper::to_dto(walk)))
}

pub async fn delete_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Walk>, ApiError> {
    info!("DELETE /Walks/{}", id);

    let walk = state
        .walk_service
        .delete_walk(id)
        .await?
        .ok_or(ApiError::NotFound("Walk"))?;

    Ok(Json(WalkMapper::to_dto(walk)))
}
