// Repository modules
pub mod region_repository;
pub mod walk_repository;
pub mod walk_difficulty_repository;

// Re-export repository types
pub use region_repository::RegionRepository;
pub use walk_repository::WalkRepository;
pub use walk_difficulty_repository::WalkDifficultyRepository;

use anyhow::{Context, Result};
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

/// Ids are stored as hyphenated TEXT; parse one back out of a row
pub(crate) fn uuid_column(row: &SqliteRow, column: &str) -> Result<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).with_context(|| format!("Invalid uuid in column {}: {}", column, raw))
}
