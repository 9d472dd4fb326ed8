use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{Repository, Result};
use crate::modules::basics::models::Basic;

/// Basic repository for database operations
#[derive(Clone)]
pub struct BasicRepository {
    pool: SqlitePool,
}

impl BasicRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Basic> for BasicRepository {
    async fn list(&self) -> Result<Vec<Basic>> {
        let basics = sqlx::query_as::<_, Basic>(
            r#"
            SELECT id, name, description, diagram_url
            FROM basics
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(basics)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Basic>> {
        let basic = sqlx::query_as::<_, Basic>(
            r#"
            SELECT id, name, description, diagram_url
            FROM basics
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(basic)
    }

    async fn insert(&self, basic: &Basic) -> Result<Basic> {
        let created = sqlx::query_as::<_, Basic>(
            r#"
            INSERT INTO basics (id, name, description, diagram_url)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, diagram_url
            "#,
        )
        .bind(&basic.id)
        .bind(&basic.name)
        .bind(&basic.description)
        .bind(&basic.diagram_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn replace(&self, basic: &Basic) -> Result<Option<Basic>> {
        let updated = sqlx::query_as::<_, Basic>(
            r#"
            UPDATE basics
            SET name = ?, description = ?, diagram_url = ?
            WHERE id = ?
            RETURNING id, name, description, diagram_url
            "#,
        )
        .bind(&basic.name)
        .bind(&basic.description)
        .bind(&basic.diagram_url)
        .bind(&basic.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM basics WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
