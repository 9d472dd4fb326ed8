use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{Repository, Result};
use crate::modules::players::models::Player;

/// Player repository for database operations
#[derive(Clone)]
pub struct PlayerRepository {
    pool: SqlitePool,
}

impl PlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Player> for PlayerRepository {
    async fn list(&self) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, jersey_number, position, status, age, height,
                   weight, preferred_foot, team_id
            FROM players
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Player>> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, jersey_number, position, status, age, height,
                   weight, preferred_foot, team_id
            FROM players
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(player)
    }

    async fn insert(&self, player: &Player) -> Result<Player> {
        let created = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (
                id, name, jersey_number, position, status, age, height,
                weight, preferred_foot, team_id
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, jersey_number, position, status, age, height,
                      weight, preferred_foot, team_id
            "#,
        )
        .bind(&player.id)
        .bind(&player.name)
        .bind(player.jersey_number)
        .bind(&player.position)
        .bind(&player.status)
        .bind(player.age)
        .bind(player.height)
        .bind(player.weight)
        .bind(&player.preferred_foot)
        .bind(&player.team_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn replace(&self, player: &Player) -> Result<Option<Player>> {
        let updated = sqlx::query_as::<_, Player>(
            r#"
            UPDATE players
            SET name = ?, jersey_number = ?, position = ?, status = ?, age = ?,
                height = ?, weight = ?, preferred_foot = ?, team_id = ?
            WHERE id = ?
            RETURNING id, name, jersey_number, position, status, age, height,
                      weight, preferred_foot, team_id
            "#,
        )
        .bind(&player.name)
        .bind(player.jersey_number)
        .bind(&player.position)
        .bind(&player.status)
        .bind(player.age)
        .bind(player.height)
        .bind(player.weight)
        .bind(&player.preferred_foot)
        .bind(&player.team_id)
        .bind(&player.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
