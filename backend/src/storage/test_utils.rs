//! Test helpers for storage-backed tests

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::Region;
use crate::storage::{DbConnection, RegionRepository, RegionStorage};

/// Wraps a real region repository and counts every call that reaches it
#[derive(Clone)]
pub struct CountingRegionStorage {
    inner: RegionRepository,
    calls: Arc<AtomicUsize>,
}

impl CountingRegionStorage {
    pub async fn new() -> Self {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        Self {
            inner: RegionRepository::new(db),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RegionStorage for CountingRegionStorage {
    async fn list(&self) -> Result<Vec<Region>> {
        self.record();
        self.inner.list().await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>> {
        self.record();
        self.inner.get(id).await
    }

    async fn add(&self, region: Region) -> Result<Region> {
        self.record();
        self.inner.add(region).await
    }

    async fn update(&self, id: Uuid, region: Region) -> Result<Option<Region>> {
        self.record();
        self.inner.update(id, region).await
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        self.record();
        self.inner.delete(id).await
    }
}

/// A region storage whose every call fails, for exercising error paths
pub struct FailingRegionStorage;

#[async_trait]
impl RegionStorage for FailingRegionStorage {
    async fn list(&self) -> Result<Vec<Region>> {
        Err(anyhow::anyhow!("database is locked"))
    }

    async fn get(&self, _id: Uuid) -> Result<Option<Region>> {
        Err(anyhow::anyhow!("database is locked"))
    }

    async fn add(&self, _region: Region) -> Result<Region> {
        Err(anyhow::anyhow!("database is locked"))
    }

    async fn update(&self, _id: Uuid, _region: Region) -> Result<Option<Region>> {
        Err(anyhow::anyhow!("database is locked"))
    }

    async fn delete(&self, _id: Uuid) -> Result<Option<Region>> {
        Err(anyhow::anyhow!("database is locked"))
    }
}
