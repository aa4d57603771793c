pub mod region_mapper;
pub mod walk_difficulty_mapper;
pub mod walk_mapper;

pub use region_mapper::RegionMapper;
pub use walk_difficulty_mapper::WalkDifficultyMapper;
pub use walk_mapper::WalkMapper;
