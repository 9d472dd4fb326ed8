use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{new_record_id, AppError, Repository, Result};
use crate::modules::players::models::{Player, PlayerCreate};

/// Service for squad management
pub struct PlayerService {
    repository: Arc<dyn Repository<Player>>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn Repository<Player>>) -> Self {
        Self { repository }
    }

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        self.repository.list().await
    }

    pub async fn get_player(&self, id: &str) -> Result<Player> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Player not found"))
    }

    pub async fn create_player(&self, payload: PlayerCreate) -> Result<Player> {
        let player = Player::from_payload(new_record_id(), payload);
        let created = self.repository.insert(&player).await?;

        info!(
            record_id = %created.id,
            jersey_number = created.jersey_number,
            position = %created.position,
            "Player created"
        );
        Ok(created)
    }

    pub async fn update_player(&self, id: &str, payload: PlayerCreate) -> Result<Player> {
        let player = Player::from_payload(id.to_string(), payload);

        let updated = self.repository.replace(&player).await?.ok_or_else(|| {
            warn!(record_id = %id, "Update of unknown player");
            AppError::not_found("Player not found")
        })?;

        info!(record_id = %id, "Player updated");
        Ok(updated)
    }

    pub async fn delete_player(&self, id: &str) -> Result<()> {
        if !self.repository.delete(id).await? {
            warn!(record_id = %id, "Delete of unknown player");
            return Err(AppError::not_found("Player not found"));
        }

        info!(record_id = %id, "Player deleted");
        Ok(())
    }
}
