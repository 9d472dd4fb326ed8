use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{Repository, Result};
use crate::modules::exercises::models::Exercise;

/// Exercise repository for database operations
#[derive(Clone)]
pub struct ExerciseRepository {
    pool: SqlitePool,
}

impl ExerciseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Exercise> for ExerciseRepository {
    async fn list(&self) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, intensity, description, setup, variations,
                   coaching_points, goalkeepers, equipment, media_url,
                   linked_basics, linked_principles, linked_tactics
            FROM exercises
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Exercise>> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, intensity, description, setup, variations,
                   coaching_points, goalkeepers, equipment, media_url,
                   linked_basics, linked_principles, linked_tactics
            FROM exercises
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(exercise)
    }

    async fn insert(&self, exercise: &Exercise) -> Result<Exercise> {
        let created = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (
                id, name, intensity, description, setup, variations,
                coaching_points, goalkeepers, equipment, media_url,
                linked_basics, linked_principles, linked_tactics
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, intensity, description, setup, variations,
                      coaching_points, goalkeepers, equipment, media_url,
                      linked_basics, linked_principles, linked_tactics
            "#,
        )
        .bind(&exercise.id)
        .bind(&exercise.name)
        .bind(&exercise.intensity)
        .bind(&exercise.description)
        .bind(&exercise.setup)
        .bind(&exercise.variations)
        .bind(&exercise.coaching_points)
        .bind(exercise.goalkeepers)
        .bind(&exercise.equipment)
        .bind(&exercise.media_url)
        .bind(&exercise.linked_basics)
        .bind(&exercise.linked_principles)
        .bind(&exercise.linked_tactics)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn replace(&self, exercise: &Exercise) -> Result<Option<Exercise>> {
        let updated = sqlx::query_as::<_, Exercise>(
            r#"
            UPDATE exercises
            SET name = ?, intensity = ?, description = ?, setup = ?, variations = ?,
                coaching_points = ?, goalkeepers = ?, equipment = ?, media_url = ?,
                linked_basics = ?, linked_principles = ?, linked_tactics = ?
            WHERE id = ?
            RETURNING id, name, intensity, description, setup, variations,
                      coaching_points, goalkeepers, equipment, media_url,
                      linked_basics, linked_principles, linked_tactics
            "#,
        )
        .bind(&exercise.name)
        .bind(&exercise.intensity)
        .bind(&exercise.description)
        .bind(&exercise.setup)
        .bind(&exercise.variations)
        .bind(&exercise.coaching_points)
        .bind(exercise.goalkeepers)
        .bind(&exercise.equipment)
        .bind(&exercise.media_url)
        .bind(&exercise.linked_basics)
        .bind(&exercise.linked_principles)
        .bind(&exercise.linked_tactics)
        .bind(&exercise.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
