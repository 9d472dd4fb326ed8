use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A fundamental drill in the basics library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Basic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub diagram_url: Option<String>,
}

/// Create/replace payload for a basic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicCreate {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub diagram_url: Option<String>,
}

impl Basic {
    pub fn from_payload(id: String, payload: BasicCreate) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            diagram_url: payload.diagram_url,
        }
    }
}
