//! # Storage Traits
//!
//! Data access ports for each resource. The domain layer depends only on
//! these traits; the SQLite repositories are one implementation.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{Region, Walk, WalkDifficulty};

/// Trait defining the interface for region storage operations
#[async_trait]
pub trait RegionStorage: Send + Sync {
    /// List all regions in insertion order
    async fn list(&self) -> Result<Vec<Region>>;

    /// Retrieve a region by ID
    async fn get(&self, id: Uuid) -> Result<Option<Region>>;

    /// Store a new region. The incoming id is ignored and a fresh one is
    /// assigned; the stored region is returned.
    async fn add(&self, region: Region) -> Result<Region>;

    /// Overwrite the region at `id`. Returns `None` if no such region exists.
    async fn update(&self, id: Uuid, region: Region) -> Result<Option<Region>>;

    /// Remove the region at `id`, returning it if it existed
    async fn delete(&self, id: Uuid) -> Result<Option<Region>>;
}

/// Trait defining the interface for walk storage operations
#[async_trait]
pub trait WalkStorage: Send + Sync {
    async fn list(&self) -> Result<Vec<Walk>>;

    async fn get(&self, id: Uuid) -> Result<Option<Walk>>;

    async fn add(&self, walk: Walk) -> Result<Walk>;

    async fn update(&self, id: Uuid, walk: Walk) -> Result<Option<Walk>>;

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>>;
}

/// Trait defining the interface for walk difficulty storage operations
#[async_trait]
pub trait WalkDifficultyStorage: Send + Sync {
    async fn list(&self) -> Result<Vec<WalkDifficulty>>;

    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;

    async fn add(&self, walk_difficulty: WalkDifficulty) -> Result<WalkDifficulty>;

    async fn update(&self, id: Uuid, walk_difficulty: WalkDifficulty) -> Result<Option<WalkDifficulty>>;

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;
}
