//! # Domain Module
//!
//! Domain models and the services that operate on them.
//!
//! Services are thin: each operation is one call into a storage port, wrapped
//! with logging. They never see transfer objects; the REST layer maps those
//! to and from the models here.

pub mod models;
pub mod region_service;
pub mod walk_difficulty_service;
pub mod walk_service;

pub use region_service::RegionService;
pub use walk_difficulty_service::WalkDifficultyService;
pub use walk_service::WalkService;
