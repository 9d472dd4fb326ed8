// Test Data Factory
//
// Payload builders for every collection. Names carry a UUID suffix so that
// records created in one test are easy to tell apart.

use serde_json::{json, Value};
use uuid::Uuid;

/// Test data factory for generating request payloads
pub struct TestDataFactory;

impl TestDataFactory {
    /// Name with a unique suffix, e.g. "Rondo-3f2a..."
    pub fn unique_name(prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4().simple())
    }

    pub fn basic_payload() -> Value {
        json!({
            "name": "Passing Gate",
            "description": "Two-cone gate drill"
        })
    }

    pub fn principle_payload() -> Value {
        json!({
            "name": Self::unique_name("Compactness"),
            "game_phase": "Defending",
            "description": "Keep distances short between lines"
        })
    }

    pub fn tactic_payload() -> Value {
        json!({
            "name": Self::unique_name("High Press"),
            "formation": "4-3-3",
            "description": "Press the first pass",
            "diagram_url": "https://example.com/high-press.png",
            "suggested_drills": "Rondo 4v2\nPressing triggers"
        })
    }

    /// Exercise payload with every optional field populated
    pub fn full_exercise_payload() -> Value {
        json!({
            "name": Self::unique_name("Finishing"),
            "intensity": "High",
            "description": "Finishing under pressure",
            "setup": "Two goals, 30x20 area",
            "variations": "Limit touches",
            "coaching_points": "Head up, open body",
            "goalkeepers": 2,
            "equipment": "Cones, bibs",
            "media_url": "https://example.com/finishing.mp4",
            "linked_basics": "b1,b2",
            "linked_principles": "p1",
            "linked_tactics": "t1"
        })
    }

    /// Exercise payload with only the required fields
    pub fn minimal_exercise_payload() -> Value {
        json!({
            "name": Self::unique_name("Rondo"),
            "intensity": "Medium",
            "description": "Keep possession in a circle"
        })
    }

    pub fn training_session_payload(date: &str) -> Value {
        json!({
            "date": date,
            "start_time": "09:00 AM",
            "end_time": "11:00 AM",
            "focus": "Pressing",
            "intensity": "High",
            "selected_players": "p1,p2,p3",
            "selected_exercises": "ex1,ex2"
        })
    }

    pub fn player_payload(jersey_number: i64) -> Value {
        json!({
            "name": Self::unique_name("Player"),
            "jersey_number": jersey_number,
            "position": "Midfielder",
            "status": "Active",
            "age": 21,
            "height": 178,
            "weight": 72,
            "preferred_foot": "Left"
        })
    }
}
