//! # REST API for Region Management
//!
//! Endpoints for listing, retrieving, creating, updating, and deleting
//! regions. Writes are validated before reaching the domain layer.

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
use super::mappers::RegionMapper;
use super::validation::{validate_add_region, validate_update_region, validated};
use crate::AppState;
use shared::{AddRegionRequest, Region, UpdateRegionRequest};

/// Create a router for region related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Regions", get(list_regions).post(create_region))
        .route(
            "/Regions/:id",
            get(get_region).put(update_region).delete(delete_region),
        )
}

/// List all regions
pub async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<Region>>, ApiError> {
    info!("GET /Regions");

    let regions = state.region_service.list_regions().await?;
    Ok(Json(RegionMapper::to_dto_list(regions)))
}

/// Get a region by ID
pub async fn get_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Region>, ApiError> {
    info!("GET /Regions/{}", id);

    let region = state
        .region_service
        .get_region(id)
        .await?
        .ok_or(ApiError::NotFound("Region"))?;

    Ok(Json(RegionMapper::to_dto(region)))
}

/// Create a region. A JSON `null` body is reported as a validation error.
pub async fn create_region(
    State(state): State<AppState>,
    Json(request): Json<Option<AddRegionRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /Regions - request: {:?}", request);

    let request = validated(request, validate_add_region)?;

    let region = state
        .region_service
        .create_region(RegionMapper::from_add_request(request))
        .await?;

    let location = format!("/Regions/{}", region.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RegionMapper::to_dto(region)),
    ))
}

/// Replace the region at `id` with the request body
pub async fn update_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<Option<UpdateRegionRequest>>,
) -> Result<Json<Region>, ApiError> {
    info!("PUT /Regions/{} - request: {:?}", id, request);

    let request = validated(request, validate_update_region)?;

    let region = state
        .region_service
        .update_region(id, RegionMapper::from_update_request(request))
        .await?
        .ok_or(ApiError::NotFound("Region"))?;

    Ok(Json(RegionMapper::to_dto(region)))
}

/// Delete a region, returning what was removed
pub async fn delete_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Region>, ApiError> {
    info!("DELETE /Regions/{}", id);

    let region = state
        .region_service
        .delete_region(id)
        .await?
        .ok_or(ApiError::NotFound("Region"))?;

    Ok(Json(RegionMapper::to_dto(region)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_utils::{send, test_app, test_state_with_regions};
    use crate::storage::test_utils::FailingRegionStorage;
    use axum::http::Method;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn auckland() -> Value {
        json!({
            "code": "AB",
            "name": "Auckland",
            "area": 100,
            "lat": 0,
            "long": 0,
            "population": 50
        })
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (app, _) = test_app().await;

        let response = send(&app, Method::GET, "/Regions", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!([]));
    }

    #[tokio::test]
    async fn test_create_valid_region() {
        let (app, storage) = test_app().await;

        let response = send(&app, Method::POST, "/Regions", Some(auckland())).await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(storage.calls(), 1);

        let created: Region = serde_json::from_value(response.body).unwrap();
        assert_ne!(created.id, Uuid::nil());
        assert_eq!(created.code, "AB");
        assert_eq!(created.name, "Auckland");
        assert_eq!(created.area, 100.0);
        assert_eq!(created.lat, 0.0);
        assert_eq!(created.long, 0.0);
        assert_eq!(created.population, 50);

        let location = response.headers.get(header::LOCATION).unwrap().to_str().unwrap();
        assert_eq!(location, format!("/Regions/{}", created.id));
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let (app, _) = test_app().await;

        let first = send(&app, Method::POST, "/Regions", Some(auckland())).await;
        let second = send(&app, Method::POST, "/Regions", Some(auckland())).await;

        assert_ne!(first.body["id"], second.body["id"]);
    }

    #[tokio::test]
    async fn test_get_after_create_matches() {
        let (app, _) = test_app().await;

        let created = send(&app, Method::POST, "/Regions", Some(auckland())).await;
        let location = created.headers.get(header::LOCATION).unwrap().to_str().unwrap().to_string();

        let fetched = send(&app, Method::GET, &location, None).await;

        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.body, created.body);
    }

    #[tokio::test]
    async fn test_list_returns_created_regions_in_order() {
        let (app, _) = test_app().await;

        let first = send(&app, Method::POST, "/Regions", Some(auckland())).await;
        let mut wellington = auckland();
        wellington["code"] = json!("WGN");
        wellington["name"] = json!("Wellington");
        let second = send(&app, Method::POST, "/Regions", Some(wellington)).await;

        let listed = send(&app, Method::GET, "/Regions", None).await;
        assert_eq!(listed.body, json!([first.body, second.body]));
    }

    #[tokio::test]
    async fn test_invalid_region_never_reaches_storage() {
        let (app, storage) = test_app().await;

        let body = json!({ "code": "", "name": "Auckland", "area": -1, "population": -5 });
        let response = send(&app, Method::POST, "/Regions", Some(body)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(storage.calls(), 0);

        let errors = &response.body["errors"];
        assert!(errors.get("code").is_some());
        assert!(errors.get("area").is_some());
        assert!(errors.get("population").is_some());
        assert!(errors.get("name").is_none());
        assert_eq!(response.body["status"], 400);
    }

    #[tokio::test]
    async fn test_null_body_is_a_single_error() {
        let (app, storage) = test_app().await;

        let response = send(&app, Method::POST, "/Regions", Some(Value::Null)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["errors"], json!({ "request": ["Region data is required"] }));
        assert_eq!(storage.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_region() {
        let (app, _) = test_app().await;

        let response = send(&app, Method::GET, &format!("/Regions/{}", Uuid::new_v4()), None).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, Value::Null);
    }

    #[tokio::test]
    async fn test_update_region() {
        let (app, _) = test_app().await;
        let created = send(&app, Method::POST, "/Regions", Some(auckland())).await;
        let id = created.body["id"].as_str().unwrap().to_string();

        let mut changes = auckland();
        changes["name"] = json!("Tāmaki Makaurau");
        changes["population"] = json!(60);
        let updated = send(&app, Method::PUT, &format!("/Regions/{}", id), Some(changes)).await;

        assert_eq!(updated.status, StatusCode::OK);
        assert_eq!(updated.body["id"], json!(id));
        assert_eq!(updated.body["name"], "Tāmaki Makaurau");
        assert_eq!(updated.body["population"], 60);

        let fetched = send(&app, Method::GET, &format!("/Regions/{}", id), None).await;
        assert_eq!(fetched.body, updated.body);
    }

    #[tokio::test]
    async fn test_update_missing_region_does_not_mutate() {
        let (app, _) = test_app().await;
        let created = send(&app, Method::POST, "/Regions", Some(auckland())).await;

        let response = send(
            &app,
            Method::PUT,
            &format!("/Regions/{}", Uuid::new_v4()),
            Some(auckland()),
        )
        .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);

        let listed = send(&app, Method::GET, "/Regions", None).await;
        assert_eq!(listed.body, json!([created.body]));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let (app, storage) = test_app().await;

        let body = json!({ "code": "AB", "name": "Auckland", "area": 100, "lat": -36.8 });
        let response = send(&app, Method::PUT, &format!("/Regions/{}", Uuid::new_v4()), Some(body)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["errors"], json!({ "lat": ["Lat must be zero"] }));
        assert_eq!(storage.calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (app, _) = test_app().await;
        let created = send(&app, Method::POST, "/Regions", Some(auckland())).await;
        let uri = format!("/Regions/{}", created.body["id"].as_str().unwrap());

        let deleted = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(deleted.status, StatusCode::OK);
        assert_eq!(deleted.body, created.body);

        let fetched = send(&app, Method::GET, &uri, None).await;
        assert_eq!(fetched.status, StatusCode::NOT_FOUND);

        let deleted_again = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(deleted_again.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected_before_handler() {
        let (app, storage) = test_app().await;

        let response = send(&app, Method::GET, "/Regions/not-a-uuid", None).await;

        assert!(response.status.is_client_error());
        assert_eq!(storage.calls(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let state = test_state_with_regions(Arc::new(FailingRegionStorage)).await;
        let app = super::super::router().with_state(state);

        let listed = send(&app, Method::GET, "/Regions", None).await;
        assert_eq!(listed.status, StatusCode::INTERNAL_SERVER_ERROR);

        let created = send(&app, Method::POST, "/Regions", Some(auckland())).await;
        assert_eq!(created.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
