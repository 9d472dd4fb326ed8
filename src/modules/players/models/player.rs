use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A squad member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub jersey_number: i64,
    pub position: String,
    pub status: String,
    pub age: i64,
    /// Centimetres
    pub height: i64,
    /// Kilograms
    pub weight: i64,
    pub preferred_foot: String,
    /// Unvalidated reference to a team
    pub team_id: Option<String>,
}

/// Create/replace payload for a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCreate {
    pub name: String,
    pub jersey_number: i64,
    pub position: String,
    pub status: String,
    pub age: i64,
    pub height: i64,
    pub weight: i64,
    pub preferred_foot: String,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl Player {
    pub fn from_payload(id: String, payload: PlayerCreate) -> Self {
        Self {
            id,
            name: payload.name,
            jersey_number: payload.jersey_number,
            position: payload.position,
            status: payload.status,
            age: payload.age,
            height: payload.height,
            weight: payload.weight,
            preferred_foot: payload.preferred_foot,
            team_id: payload.team_id,
        }
    }
}
