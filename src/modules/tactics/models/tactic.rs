use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::record::empty_text;

/// A team tactic built around a formation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tactic {
    pub id: String,
    pub name: String,
    pub formation: String,
    pub description: String,
    pub diagram_url: Option<String>,
    /// Newline-separated drill suggestions
    pub suggested_drills: Option<String>,
}

/// Create/replace payload for a tactic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticCreate {
    pub name: String,
    pub formation: String,
    pub description: String,
    #[serde(default)]
    pub diagram_url: Option<String>,
    #[serde(default = "empty_text")]
    pub suggested_drills: Option<String>,
}

impl Tactic {
    pub fn from_payload(id: String, payload: TacticCreate) -> Self {
        Self {
            id,
            name: payload.name,
            formation: payload.formation,
            description: payload.description,
            diagram_url: payload.diagram_url,
            suggested_drills: payload.suggested_drills,
        }
    }
}
