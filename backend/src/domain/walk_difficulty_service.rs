use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::models::WalkDifficulty;
use crate::storage::WalkDifficultyStorage;

/// Service for managing walk difficulty levels
#[derive(Clone)]
pub struct WalkDifficultyService {
    storage: Arc<dyn WalkDifficultyStorage>,
}

impl WalkDifficultyService {
    pub fn new(storage: Arc<dyn WalkDifficultyStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_walk_difficulties(&self) -> Result<Vec<WalkDifficulty>> {
        info!("Listing all walk difficulties");
        self.storage.list().await
    }

    pub async fn get_walk_difficulty(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        info!("Getting walk difficulty: {}", id);

        let walk_difficulty = self.storage.get(id).await?;
        if walk_difficulty.is_none() {
            warn!("Walk difficulty not found: {}", id);
        }

        Ok(walk_difficulty)
    }

    pub async fn create_walk_difficulty(&self, walk_difficulty: WalkDifficulty) -> Result<WalkDifficulty> {
        info!("Creating walk difficulty: code={}", walk_difficulty.code);

        let walk_difficulty = self.storage.add(walk_difficulty).await?;

        info!("Created walk difficulty with ID: {}", walk_difficulty.id);
        Ok(walk_difficulty)
    }

    pub async fn update_walk_difficulty(
        &self,
        id: Uuid,
        walk_difficulty: WalkDifficulty,
    ) -> Result<Option<WalkDifficulty>> {
        info!("Updating walk difficulty: {}", id);

        let updated = self.storage.update(id, walk_difficulty).await?;
        if updated.is_none() {
            warn!("Walk difficulty not found for update: {}", id);
        }

        Ok(updated)
    }

    pub async fn delete_walk_difficulty(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        info!("Deleting walk difficulty: {}", id);

        let deleted = self.storage.delete(id).await?;
        if deleted.is_none() {
            warn!("Walk difficulty not found for delete: {}", id);
        }

        Ok(deleted)
    }
}
