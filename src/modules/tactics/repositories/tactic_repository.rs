use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{Repository, Result};
use crate::modules::tactics::models::Tactic;

/// Tactic repository for database operations
#[derive(Clone)]
pub struct TacticRepository {
    pool: SqlitePool,
}

impl TacticRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Tactic> for TacticRepository {
    async fn list(&self) -> Result<Vec<Tactic>> {
        let tactics = sqlx::query_as::<_, Tactic>(
            r#"
            SELECT id, name, formation, description, diagram_url, suggested_drills
            FROM tactics
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tactics)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tactic>> {
        let tactic = sqlx::query_as::<_, Tactic>(
            r#"
            SELECT id, name, formation, description, diagram_url, suggested_drills
            FROM tactics
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tactic)
    }

    async fn insert(&self, tactic: &Tactic) -> Result<Tactic> {
        let created = sqlx::query_as::<_, Tactic>(
            r#"
            INSERT INTO tactics (id, name, formation, description, diagram_url, suggested_drills)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, formation, description, diagram_url, suggested_drills
            "#,
        )
        .bind(&tactic.id)
        .bind(&tactic.name)
        .bind(&tactic.formation)
        .bind(&tactic.description)
        .bind(&tactic.diagram_url)
        .bind(&tactic.suggested_drills)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn replace(&self, tactic: &Tactic) -> Result<Option<Tactic>> {
        let updated = sqlx::query_as::<_, Tactic>(
            r#"
            UPDATE tactics
            SET name = ?, formation = ?, description = ?, diagram_url = ?,
                suggested_drills = ?
            WHERE id = ?
            RETURNING id, name, formation, description, diagram_url, suggested_drills
            "#,
        )
        .bind(&tactic.name)
        .bind(&tactic.formation)
        .bind(&tactic.description)
        .bind(&tactic.diagram_url)
        .bind(&tactic.suggested_drills)
        .bind(&tactic.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tactics WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
