use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    /// Not checked against the regions table
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}
