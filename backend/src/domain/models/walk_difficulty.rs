use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: String,
}
