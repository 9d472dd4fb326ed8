// An exercise is a full drill sheet. The linked_* columns hold comma-joined
// identifiers of basics, principles and tactics; they are free text and are
// never checked against the referenced collections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::record::empty_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub intensity: String,
    pub description: String,
    pub setup: Option<String>,
    pub variations: Option<String>,
    pub coaching_points: Option<String>,
    pub goalkeepers: i64,
    pub equipment: Option<String>,
    pub media_url: Option<String>,
    pub linked_basics: Option<String>,
    pub linked_principles: Option<String>,
    pub linked_tactics: Option<String>,
}

/// Create/replace payload for an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCreate {
    pub name: String,
    pub intensity: String,
    pub description: String,
    #[serde(default = "empty_text")]
    pub setup: Option<String>,
    #[serde(default = "empty_text")]
    pub variations: Option<String>,
    #[serde(default = "empty_text")]
    pub coaching_points: Option<String>,
    #[serde(default)]
    pub goalkeepers: i64,
    #[serde(default = "empty_text")]
    pub equipment: Option<String>,
    #[serde(default = "empty_text")]
    pub linked_basics: Option<String>,
    #[serde(default = "empty_text")]
    pub linked_principles: Option<String>,
    #[serde(default = "empty_text")]
    pub linked_tactics: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
}

impl Exercise {
    pub fn from_payload(id: String, payload: ExerciseCreate) -> Self {
        Self {
            id,
            name: payload.name,
            intensity: payload.intensity,
            description: payload.description,
            setup: payload.setup,
            variations: payload.variations,
            coaching_points: payload.coaching_points,
            goalkeepers: payload.goalkeepers,
            equipment: payload.equipment,
            media_url: payload.media_url,
            linked_basics: payload.linked_basics,
            linked_principles: payload.linked_principles,
            linked_tactics: payload.linked_tactics,
        }
    }
}
