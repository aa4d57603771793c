pub mod region;
pub mod walk;
pub mod walk_difficulty;

pub use region::Region;
pub use walk::Walk;
pub use walk_difficulty::WalkDifficulty;
