use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{new_record_id, AppError, Repository, Result};
use crate::modules::training_sessions::models::{TrainingSession, TrainingSessionCreate};

/// Service for training session planning
pub struct TrainingSessionService {
    repository: Arc<dyn Repository<TrainingSession>>,
}

impl TrainingSessionService {
    pub fn new(repository: Arc<dyn Repository<TrainingSession>>) -> Self {
        Self { repository }
    }

    pub async fn list_sessions(&self) -> Result<Vec<TrainingSession>> {
        self.repository.list().await
    }

    pub async fn get_session(&self, id: &str) -> Result<TrainingSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))
    }

    /// Create a session. A malformed date aborts before anything is stored.
    pub async fn create_session(&self, payload: TrainingSessionCreate) -> Result<TrainingSession> {
        let session = TrainingSession::from_payload(new_record_id(), payload)?;
        let created = self.repository.insert(&session).await?;

        info!(
            record_id = %created.id,
            date = %created.date,
            focus = %created.focus,
            "Training session created"
        );
        Ok(created)
    }

    /// Replace every field of a session.
    ///
    /// The row is located first so that an unknown ID reports NotFound
    /// even when the payload date is also malformed.
    pub async fn update_session(
        &self,
        id: &str,
        payload: TrainingSessionCreate,
    ) -> Result<TrainingSession> {
        if self.repository.find_by_id(id).await?.is_none() {
            warn!(record_id = %id, "Update of unknown training session");
            return Err(AppError::not_found("Session not found"));
        }

        let session = TrainingSession::from_payload(id.to_string(), payload)?;

        // The row can vanish between the lookup and the write
        let updated = self
            .repository
            .replace(&session)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        info!(record_id = %id, date = %updated.date, "Training session updated");
        Ok(updated)
    }

    pub async fn delete_session(&self, id: &str) -> Result<()> {
        if !self.repository.delete(id).await? {
            warn!(record_id = %id, "Delete of unknown training session");
            return Err(AppError::not_found("Session not found"));
        }

        info!(record_id = %id, "Training session deleted");
        Ok(())
    }
}
