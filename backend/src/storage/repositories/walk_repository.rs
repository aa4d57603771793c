use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::uuid_column;
use crate::domain::models::Walk;
use crate::storage::connection::DbConnection;
use crate::storage::traits::WalkStorage;

/// SQLite repository for walks
#[derive(Clone)]
pub struct WalkRepository {
    db: DbConnection,
}

impl WalkRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn walk_from_row(row: &SqliteRow) -> Result<Walk> {
        Ok(Walk {
            id: uuid_column(row, "id")?,
            name: row.try_get("name")?,
            length: row.try_get("length")?,
            region_id: uuid_column(row, "region_id")?,
            walk_difficulty_id: uuid_column(row, "walk_difficulty_id")?,
        })
    }
}

#[async_trait]
impl WalkStorage for WalkRepository {
    async fn list(&self) -> Result<Vec<Walk>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, length, region_id, walk_difficulty_id
            FROM walks
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::walk_from_row).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, length, region_id, walk_difficulty_id
            FROM walks
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::walk_from_row).transpose()
    }

    async fn add(&self, walk: Walk) -> Result<Walk> {
        let walk = Walk {
            id: Uuid::new_v4(),
            ..walk
        };

        sqlx::query(
            r#"
            INSERT INTO walks (id, name, length, region_id, walk_difficulty_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(walk.id.to_string())
        .bind(&walk.name)
        .bind(walk.length)
        .bind(walk.region_id.to_string())
        .bind(walk.walk_difficulty_id.to_string())
        .execute(self.db.pool())
        .await?;

        Ok(walk)
    }

    async fn update(&self, id: Uuid, walk: Walk) -> Result<Option<Walk>> {
        let row = sqlx::query(
            r#"
            UPDATE walks
            SET name = ?, length = ?, region_id = ?, walk_difficulty_id = ?
            WHERE id = ?
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(&walk.name)
        .bind(walk.length)
        .bind(walk.region_id.to_string())
        .bind(walk.walk_difficulty_id.to_string())
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::walk_from_row).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>> {
        let row = sqlx::query(
            r#"
            DELETE FROM walks
            WHERE id = ?
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::walk_from_row).transpose()
    }
}
