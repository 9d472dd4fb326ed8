use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::record::empty_text;

/// A tactical principle tied to a phase of play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Principle {
    pub id: String,
    pub name: String,
    pub game_phase: String,
    pub description: String,
    pub coaching_notes: Option<String>,
    /// Newline-separated tips
    pub implementation_tips: Option<String>,
    pub media_url: Option<String>,
}

/// Create/replace payload for a principle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipleCreate {
    pub name: String,
    pub game_phase: String,
    pub description: String,
    #[serde(default = "empty_text")]
    pub coaching_notes: Option<String>,
    #[serde(default = "empty_text")]
    pub implementation_tips: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
}

impl Principle {
    pub fn from_payload(id: String, payload: PrincipleCreate) -> Self {
        Self {
            id,
            name: payload.name,
            game_phase: payload.game_phase,
            description: payload.description,
            coaching_notes: payload.coaching_notes,
            implementation_tips: payload.implementation_tips,
            media_url: payload.media_url,
        }
    }
}
