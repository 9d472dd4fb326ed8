use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{Repository, Result};
use crate::modules::principles::models::Principle;

/// Principle repository for database operations
#[derive(Clone)]
pub struct PrincipleRepository {
    pool: SqlitePool,
}

impl PrincipleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Principle> for PrincipleRepository {
    async fn list(&self) -> Result<Vec<Principle>> {
        let principles = sqlx::query_as::<_, Principle>(
            r#"
            SELECT id, name, game_phase, description, coaching_notes,
                   implementation_tips, media_url
            FROM principles
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(principles)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Principle>> {
        let principle = sqlx::query_as::<_, Principle>(
            r#"
            SELECT id, name, game_phase, description, coaching_notes,
                   implementation_tips, media_url
            FROM principles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(principle)
    }

    async fn insert(&self, principle: &Principle) -> Result<Principle> {
        let created = sqlx::query_as::<_, Principle>(
            r#"
            INSERT INTO principles (
                id, name, game_phase, description, coaching_notes,
                implementation_tips, media_url
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, game_phase, description, coaching_notes,
                      implementation_tips, media_url
            "#,
        )
        .bind(&principle.id)
        .bind(&principle.name)
        .bind(&principle.game_phase)
        .bind(&principle.description)
        .bind(&principle.coaching_notes)
        .bind(&principle.implementation_tips)
        .bind(&principle.media_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn replace(&self, principle: &Principle) -> Result<Option<Principle>> {
        let updated = sqlx::query_as::<_, Principle>(
            r#"
            UPDATE principles
            SET name = ?, game_phase = ?, description = ?, coaching_notes = ?,
                implementation_tips = ?, media_url = ?
            WHERE id = ?
            RETURNING id, name, game_phase, description, coaching_notes,
                      implementation_tips, media_url
            "#,
        )
        .bind(&principle.name)
        .bind(&principle.game_phase)
        .bind(&principle.description)
        .bind(&principle.coaching_notes)
        .bind(&principle.implementation_tips)
        .bind(&principle.media_url)
        .bind(&principle.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM principles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
