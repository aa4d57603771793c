//! # Storage Module
//!
//! Persistence for regions, walks and walk difficulties.
//!
//! The domain layer talks to the [`traits`] ports only. The SQLite
//! repositories in [`repositories`] implement them over a shared sqlx pool
//! owned by [`DbConnection`]. Each port operation maps to a single SQL
//! statement; nothing here retries or spans a transaction.

pub mod connection;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use repositories::{RegionRepository, WalkDifficultyRepository, WalkRepository};
pub use traits::{RegionStorage, WalkDifficultyStorage, WalkStorage};
