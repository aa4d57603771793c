use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::models::Walk;
use crate::storage::WalkStorage;

/// Service for managing walks
#[derive(Clone)]
pub struct WalkService {
    storage: Arc<dyn WalkStorage>,
}

impl WalkService {
    pub fn new(storage: Arc<dyn WalkStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_walks(&self) -> Result<Vec<Walk>> {
        info!("Listing all walks");

        let walks = self.storage.list().await?;

        info!("Found {} walks", walks.len());
        Ok(walks)
    }

    pub async fn get_walk(&self, id: Uuid) -> Result<Option<Walk>> {
        info!("Getting walk: {}", id);

        let walk = self.storage.get(id).await?;
        if walk.is_none() {
            warn!("Walk not found: {}", id);
        }

        Ok(walk)
    }

    pub async fn create_walk(&self, walk: Walk) -> Result<Walk> {
        info!("Creating walk: name={}, region={}", walk.name, walk.region_id);

        let walk = self.storage.add(walk).await?;

        info!("Created walk: {} with ID: {}", walk.name, walk.id);
        Ok(walk)
    }

    pub async fn update_walk(&self, id: Uuid, walk: Walk) -> Result<Option<Walk>> {
        info!("Updating walk: {}", id);

        let updated = self.storage.update(id, walk).await?;
        if updated.is_none() {
            warn!("Walk not found for update: {}", id);
        }

        Ok(updated)
    }

    pub async fn delete_walk(&self, id: Uuid) -> Result<Option<Walk>> {
        info!("Deleting walk: {}", id);

        let deleted = self.storage.delete(id).await?;
        if deleted.is_none() {
            warn!("Walk not found for delete: {}", id);
        }

        Ok(deleted)
    }
}
