use uuid::Uuid;

/// A geographic region walks belong to
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Assigned by storage on insert; `Uuid::nil()` until then
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}
