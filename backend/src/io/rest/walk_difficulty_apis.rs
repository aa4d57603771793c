//! # REST API for Walk Difficulties

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
use super::mappers::WalkDifficultyMapper;
use crate::AppState;
use shared::{AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficulty};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/WalkDifficulties",
            get(list_walk_difficulties).post(create_walk_difficulty),
        )
        .route(
            "/WalkDifficulties/:id",
            get(get_walk_difficulty)
                .put(update_walk_difficulty)
                .delete(delete_walk_difficulty),
        )
}

pub async fn list_walk_difficulties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDifficulty>>, ApiError> {
    info!("GET /WalkDifficulties");

    let difficulties = state.walk_difficulty_service.list_walk_difficulties().await?;
    Ok(Json(WalkDifficultyMapper::to_dto_list(difficulties)))
}

pub async fn get_walk_difficulty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkDifficulty>, ApiError> {
    info!("GET /WalkDifficulties/{}", id);

    let difficulty = state
        .walk_difficulty_service
        .get_walk_difficulty(id)
        .await?
        .ok_or(ApiError::NotFound("Walk difficulty"))?;

    Ok(Json(WalkDifficultyMapper::to_dto(difficulty)))
}

pub async fn create_walk_difficulty(
    State(state): State<AppState>,
    Json(request): Json<AddWalkDifficultyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /WalkDifficulties - request: {:?}", request);

    let difficulty = state
        .walk_difficulty_service
        .create_walk_difficulty(WalkDifficultyMapper::from_add_request(request))
        .await?;

    let location = format!("/WalkDifficulties/{}", difficulty.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WalkDifficultyMapper::to_dto(difficulty)),
    ))
}

pub async fn update_walk_difficulty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWalkDifficultyRequest>,
) -> Result<Json<WalkDifficulty>, ApiError> {
    info!("PUT /WalkDifficulties/{} - request: {:?}", id, request);

    let difficulty = state
        .walk_difficulty_service
        .update_walk_difficulty(id, WalkDifficultyMapper::from_update_request(request))
        .await?
        .ok_or(ApiError::NotFound("Walk difficulty"))?;

    Ok(Json(WalkDifficultyMapper::to_dto(difficulty)))
}

pub async fn delete_walk_difficulty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkDifficulty>, ApiError> {
    info!("DELETE /WalkDifficulties/{}", id);

    let difficulty = state
        .walk_difficulty_service
        .delete_walk_difficulty(id)
        .await?
        .ok_or(ApiError::NotFound("Walk difficulty"))?;

    Ok(Json(WalkDifficultyMapper::to_dto(difficulty)))
}
