use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::models::Region;
use crate::storage::RegionStorage;

/// Service for managing regions
#[derive(Clone)]
pub struct RegionService {
    storage: Arc<dyn RegionStorage>,
}

impl RegionService {
    pub fn new(storage: Arc<dyn RegionStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_regions(&self) -> Result<Vec<Region>> {
        info!("Listing all regions");

        let regions = self.storage.list().await?;

        info!("Found {} regions", regions.len());
        Ok(regions)
    }

    pub async fn get_region(&self, id: Uuid) -> Result<Option<Region>> {
        info!("Getting region: {}", id);

        let region = self.storage.get(id).await?;
        if region.is_none() {
            warn!("Region not found: {}", id);
        }

        Ok(region)
    }

    /// Store a new region. Any id on `region` is replaced by storage.
    pub async fn create_region(&self, region: Region) -> Result<Region> {
        info!("Creating region: code={}, name={}", region.code, region.name);

        let region = self.storage.add(region).await?;

        info!("Created region: {} with ID: {}", region.name, region.id);
        Ok(region)
    }

    /// Overwrite the region at `id`; the id on `region` itself is ignored
    pub async fn update_region(&self, id: Uuid, region: Region) -> Result<Option<Region>> {
        info!("Updating region: {}", id);

        let updated = self.storage.update(id, region).await?;
        match &updated {
            Some(region) => info!("Updated region: {} with ID: {}", region.name, region.id),
            None => warn!("Region not found for update: {}", id),
        }

        Ok(updated)
    }

    pub async fn delete_region(&self, id: Uuid) -> Result<Option<Region>> {
        info!("Deleting region: {}", id);

        let deleted = self.storage.delete(id).await?;
        match &deleted {
            Some(region) => info!("Deleted region: {} with ID: {}", region.name, region.id),
            None => warn!("Region not found for delete: {}", id),
        }

        Ok(deleted)
    }
}
