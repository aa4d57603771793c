use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::uuid_column;
use crate::domain::models::Region;
use crate::storage::connection::DbConnection;
use crate::storage::traits::RegionStorage;

/// SQLite repository for regions
#[derive(Clone)]
pub struct RegionRepository {
    db: DbConnection,
}

impl RegionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn region_from_row(row: &SqliteRow) -> Result<Region> {
        Ok(Region {
            id: uuid_column(row, "id")?,
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            area: row.try_get("area")?,
            lat: row.try_get("latitude")?,
            long: row.try_get("longitude")?,
            population: row.try_get("population")?,
        })
    }
}

#[async_trait]
impl RegionStorage for RegionRepository {
    async fn list(&self) -> Result<Vec<Region>> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, name, area, latitude, longitude, population
            FROM regions
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::region_from_row).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>> {
        let row = sqlx::query(
            r#"
            SELECT id, code, name, area, latitude, longitude, population
            FROM regions
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::region_from_row).transpose()
    }

    async fn add(&self, region: Region) -> Result<Region> {
        let region = Region {
            id: Uuid::new_v4(),
            ..region
        };

        sqlx::query(
            r#"
            INSERT INTO regions (id, code, name, area, latitude, longitude, population)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(region.id.to_string())
        .bind(&region.code)
        .bind(&region.name)
        .bind(region.area)
        .bind(region.lat)
        .bind(region.long)
        .bind(region.population)
        .execute(self.db.pool())
        .await?;

        Ok(region)
    }

    async fn update(&self, id: Uuid, region: Region) -> Result<Option<Region>> {
        let row = sqlx::query(
            r#"
            UPDATE regions
            SET code = ?, name = ?, area = ?, latitude = ?, longitude = ?, population = ?
            WHERE id = ?
            RETURNING id, code, name, area, latitude, longitude, population
            "#,
        )
        .bind(&region.code)
        .bind(&region.name)
        .bind(region.area)
        .bind(region.lat)
        .bind(region.long)
        .bind(region.population)
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::region_from_row).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        let row = sqlx::query(
            r#"
            DELETE FROM regions
            WHERE id = ?
            RETURNING id, code, name, area, latitude, longitude, population
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::region_from_row).transpose()
    }
}
