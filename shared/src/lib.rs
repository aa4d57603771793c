//! Transfer objects exchanged with API clients.
//!
//! These shapes are deliberately separate from the backend's domain models:
//! the backend maps between the two at the REST boundary. All types use
//! camelCase keys on the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A region as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: Uuid,
    /// Short region code, e.g. "AKL"
    pub code: String,
    pub name: String,
    /// Area in square kilometres
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Body of `POST /Regions`
///
/// Missing fields fall back to their defaults so that the validator, not the
/// JSON extractor, reports them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRegionRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Body of `PUT /Regions/{id}`. The identity comes from the path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRegionRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// A walk as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    /// Length in kilometres
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Body of `POST /Walks`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddWalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Body of `PUT /Walks/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// A walk difficulty level, e.g. "Easy", "Medium", "Hard"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: String,
}

/// Body of `POST /WalkDifficulties`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddWalkDifficultyRequest {
    pub code: String,
}

/// Body of `PUT /WalkDifficulties/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWalkDifficultyRequest {
    pub code: String,
}

/// Body returned with a 400 when request validation fails.
///
/// `errors` maps each offending field to every message raised against it, so
/// a client can fix all problems in one round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    pub const TITLE: &'static str = "One or more validation errors occurred.";

    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            status: 400,
            errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
