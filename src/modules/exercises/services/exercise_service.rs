use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{new_record_id, AppError, Repository, Result};
use crate::modules::exercises::models::{Exercise, ExerciseCreate};

/// Service for the exercises library
pub struct ExerciseService {
    repository: Arc<dyn Repository<Exercise>>,
}

impl ExerciseService {
    pub fn new(repository: Arc<dyn Repository<Exercise>>) -> Self {
        Self { repository }
    }

    /// List every exercise in insertion order
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        self.repository.list().await
    }

    /// Get exercise by ID
    pub async fn get_exercise(&self, id: &str) -> Result<Exercise> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise not found"))
    }

    /// Store a new exercise under a freshly generated ID
    pub async fn create_exercise(&self, payload: ExerciseCreate) -> Result<Exercise> {
        let exercise = Exercise::from_payload(new_record_id(), payload);
        let created = self.repository.insert(&exercise).await?;

        info!(
            record_id = %created.id,
            intensity = %created.intensity,
            goalkeepers = created.goalkeepers,
            "Exercise created"
        );
        Ok(created)
    }

    /// Replace every field of an existing exercise.
    /// Fields omitted from the payload are reset to their defaults.
    pub async fn update_exercise(&self, id: &str, payload: ExerciseCreate) -> Result<Exercise> {
        let exercise = Exercise::from_payload(id.to_string(), payload);

        match self.repository.replace(&exercise).await? {
            Some(updated) => {
                info!(record_id = %id, "Exercise updated");
                Ok(updated)
            }
            None => {
                warn!(record_id = %id, "Update of unknown exercise");
                Err(AppError::not_found("Exercise not found"))
            }
        }
    }

    /// Permanently remove an exercise. Sessions that list its ID are left as-is.
    pub async fn delete_exercise(&self, id: &str) -> Result<()> {
        if !self.repository.delete(id).await? {
            warn!(record_id = %id, "Delete of unknown exercise");
            return Err(AppError::not_found("Exercise not found"));
        }

        info!(record_id = %id, "Exercise deleted");
        Ok(())
    }
}
