use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::uuid_column;
use crate::domain::models::WalkDifficulty;
use crate::storage::connection::DbConnection;
use crate::storage::traits::WalkDifficultyStorage;

/// SQLite repository for walk difficulties
#[derive(Clone)]
pub struct WalkDifficultyRepository {
    db: DbConnection,
}

impl WalkDifficultyRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn walk_difficulty_from_row(row: &SqliteRow) -> Result<WalkDifficulty> {
        Ok(WalkDifficulty {
            id: uuid_column(row, "id")?,
            code: row.try_get("code")?,
        })
    }
}

#[async_trait]
impl WalkDifficultyStorage for WalkDifficultyRepository {
    async fn list(&self) -> Result<Vec<WalkDifficulty>> {
        let rows = sqlx::query("SELECT id, code FROM walk_difficulties ORDER BY rowid ASC")
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::walk_difficulty_from_row).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        let row = sqlx::query("SELECT id, code FROM walk_difficulties WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::walk_difficulty_from_row).transpose()
    }

    async fn add(&self, walk_difficulty: WalkDifficulty) -> Result<WalkDifficulty> {
        let walk_difficulty = WalkDifficulty {
            id: Uuid::new_v4(),
            ..walk_difficulty
        };

        sqlx::query("INSERT INTO walk_difficulties (id, code) VALUES (?, ?)")
            .bind(walk_difficulty.id.to_string())
            .bind(&walk_difficulty.code)
            .execute(self.db.pool())
            .await?;

        Ok(walk_difficulty)
    }

    async fn update(&self, id: Uuid, walk_difficulty: WalkDifficulty) -> Result<Option<WalkDifficulty>> {
        let row = sqlx::query(
            r#"
            UPDATE walk_difficulties
            SET code = ?
            WHERE id = ?
            RETURNING id, code
            "#,
        )
        .bind(&walk_difficulty.code)
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::walk_difficulty_from_row).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        let row = sqlx::query("DELETE FROM walk_difficulties WHERE id = ? RETURNING id, code")
            .bind(id.to_string())
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::walk_difficulty_from_row).transpose()
    }
}
