//! Error type shared by every REST handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use super::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation failed for {} field(s)", .0.len())]
    ValidationFailed(ValidationErrors),
    /// Anything coming back from storage. Not retried or translated.
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::ValidationFailed(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::ValidationFailed(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors.to_problem())).into_response()
            }
            ApiError::Persistence(e) => {
                error!("Storage operation failed: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
