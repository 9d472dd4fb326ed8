use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{new_record_id, AppError, Repository, Result};
use crate::modules::basics::models::{Basic, BasicCreate};

/// Service for the basics library
pub struct BasicService {
    repository: Arc<dyn Repository<Basic>>,
}

impl BasicService {
    pub fn new(repository: Arc<dyn Repository<Basic>>) -> Self {
        Self { repository }
    }

    pub async fn list_basics(&self) -> Result<Vec<Basic>> {
        self.repository.list().await
    }

    pub async fn get_basic(&self, id: &str) -> Result<Basic> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Basic not found"))
    }

    pub async fn create_basic(&self, payload: BasicCreate) -> Result<Basic> {
        let basic = Basic::from_payload(new_record_id(), payload);
        let created = self.repository.insert(&basic).await?;

        info!(record_id = %created.id, name = %created.name, "Basic created");
        Ok(created)
    }

    /// Replace every field of an existing basic
    pub async fn update_basic(&self, id: &str, payload: BasicCreate) -> Result<Basic> {
        let basic = Basic::from_payload(id.to_string(), payload);

        match self.repository.replace(&basic).await? {
            Some(updated) => {
                info!(record_id = %id, "Basic updated");
                Ok(updated)
            }
            None => {
                warn!(record_id = %id, "Update of unknown basic");
                Err(AppError::not_found("Basic not found"))
            }
        }
    }

    pub async fn delete_basic(&self, id: &str) -> Result<()> {
        if !self.repository.delete(id).await? {
            warn!(record_id = %id, "Delete of unknown basic");
            return Err(AppError::not_found("Basic not found"));
        }

        info!(record_id = %id, "Basic deleted");
        Ok(())
    }
}
