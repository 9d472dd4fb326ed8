use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{new_record_id, AppError, Repository, Result};
use crate::modules::principles::models::{Principle, PrincipleCreate};

/// Service for the principles library
pub struct PrincipleService {
    repository: Arc<dyn Repository<Principle>>,
}

impl PrincipleService {
    pub fn new(repository: Arc<dyn Repository<Principle>>) -> Self {
        Self { repository }
    }

    pub async fn list_principles(&self) -> Result<Vec<Principle>> {
        self.repository.list().await
    }

    pub async fn get_principle(&self, id: &str) -> Result<Principle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Principle not found"))
    }

    pub async fn create_principle(&self, payload: PrincipleCreate) -> Result<Principle> {
        let principle = Principle::from_payload(new_record_id(), payload);
        let created = self.repository.insert(&principle).await?;

        info!(
            record_id = %created.id,
            game_phase = %created.game_phase,
            "Principle created"
        );
        Ok(created)
    }

    pub async fn update_principle(&self, id: &str, payload: PrincipleCreate) -> Result<Principle> {
        let principle = Principle::from_payload(id.to_string(), payload);

        let updated = self.repository.replace(&principle).await?.ok_or_else(|| {
            warn!(record_id = %id, "Update of unknown principle");
            AppError::not_found("Principle not found")
        })?;

        info!(record_id = %id, "Principle updated");
        Ok(updated)
    }

    pub async fn delete_principle(&self, id: &str) -> Result<()> {
        if !self.repository.delete(id).await? {
            warn!(record_id = %id, "Delete of unknown principle");
            return Err(AppError::not_found("Principle not found"));
        }

        info!(record_id = %id, "Principle deleted");
        Ok(())
    }
}
