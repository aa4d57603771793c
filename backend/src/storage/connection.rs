use anyhow::{Context, Result};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

/// DbConnection manages the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url)
                .await
                .with_context(|| format!("Failed to create database {}", url))?;
        }

        let pool = SqlitePool::connect(url)
            .await
            .with_context(|| format!("Failed to connect to database {}", url))?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS regions (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL,
                name TEXT NOT NULL,
                area REAL NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                population INTEGER NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create regions table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS walk_difficulties (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create walk_difficulties table")?;

        // Region and difficulty references are plain ids, not foreign keys
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS walks (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                length REAL NOT NULL,
                region_id TEXT NOT NULL,
                walk_difficulty_id TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create walks table")?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_walks_region_id
            ON walks(region_id);
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create walks index")?;

        Ok(())
    }
}
