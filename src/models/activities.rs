use serde::{Deserialize, Serialize};

/// A named extracurricular offering with a schedule, capacity, and roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Student emails in signup order. Uniqueness is enforced on mutation,
    /// so this behaves as a set for membership purposes.
    pub participants: Vec<String>,
}
