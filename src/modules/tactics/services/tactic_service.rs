use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{new_record_id, AppError, Repository, Result};
use crate::modules::tactics::models::{Tactic, TacticCreate};

/// Service for the tactics library
pub struct TacticService {
    repository: Arc<dyn Repository<Tactic>>,
}

impl TacticService {
    pub fn new(repository: Arc<dyn Repository<Tactic>>) -> Self {
        Self { repository }
    }

    pub async fn list_tactics(&self) -> Result<Vec<Tactic>> {
        self.repository.list().await
    }

    pub async fn get_tactic(&self, id: &str) -> Result<Tactic> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tactic not found"))
    }

    pub async fn create_tactic(&self, payload: TacticCreate) -> Result<Tactic> {
        let tactic = Tactic::from_payload(new_record_id(), payload);
        let created = self.repository.insert(&tactic).await?;

        info!(
            record_id = %created.id,
            formation = %created.formation,
            "Tactic created"
        );
        Ok(created)
    }

    pub async fn update_tactic(&self, id: &str, payload: TacticCreate) -> Result<Tactic> {
        let tactic = Tactic::from_payload(id.to_string(), payload);

        let updated = self.repository.replace(&tactic).await?.ok_or_else(|| {
            warn!(record_id = %id, "Update of unknown tactic");
            AppError::not_found("Tactic not found")
        })?;

        info!(record_id = %id, "Tactic updated");
        Ok(updated)
    }

    pub async fn delete_tactic(&self, id: &str) -> Result<()> {
        if !self.repository.delete(id).await? {
            warn!(record_id = %id, "Delete of unknown tactic");
            return Err(AppError::not_found("Tactic not found"));
        }

        info!(record_id = %id, "Tactic deleted");
        Ok(())
    }
}
