use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{Repository, Result};
use crate::modules::training_sessions::models::TrainingSession;

/// Training session repository for database operations
#[derive(Clone)]
pub struct TrainingSessionRepository {
    pool: SqlitePool,
}

impl TrainingSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<TrainingSession> for TrainingSessionRepository {
    async fn list(&self) -> Result<Vec<TrainingSession>> {
        let sessions = sqlx::query_as::<_, TrainingSession>(
            r#"
            SELECT id, date, start_time, end_time, focus, intensity,
                   selected_players, selected_exercises
            FROM training_sessions
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TrainingSession>> {
        let session = sqlx::query_as::<_, TrainingSession>(
            r#"
            SELECT id, date, start_time, end_time, focus, intensity,
                   selected_players, selected_exercises
            FROM training_sessions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    async fn insert(&self, session: &TrainingSession) -> Result<TrainingSession> {
        let created = sqlx::query_as::<_, TrainingSession>(
            r#"
            INSERT INTO training_sessions (
                id, date, start_time, end_time, focus, intensity,
                selected_players, selected_exercises
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, date, start_time, end_time, focus, intensity,
                      selected_players, selected_exercises
            "#,
        )
        .bind(&session.id)
        .bind(session.date)
        .bind(&session.start_time)
        .bind(&session.end_time)
        .bind(&session.focus)
        .bind(&session.intensity)
        .bind(&session.selected_players)
        .bind(&session.selected_exercises)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn replace(&self, session: &TrainingSession) -> Result<Option<TrainingSession>> {
        let updated = sqlx::query_as::<_, TrainingSession>(
            r#"
            UPDATE training_sessions
            SET date = ?, start_time = ?, end_time = ?, focus = ?, intensity = ?,
                selected_players = ?, selected_exercises = ?
            WHERE id = ?
            RETURNING id, date, start_time, end_time, focus, intensity,
                      selected_players, selected_exercises
            "#,
        )
        .bind(session.date)
        .bind(&session.start_time)
        .bind(&session.end_time)
        .bind(&session.focus)
        .bind(&session.intensity)
        .bind(&session.selected_players)
        .bind(&session.selected_exercises)
        .bind(&session.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
