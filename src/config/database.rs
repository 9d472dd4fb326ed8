use crate::core::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Table definitions, one per entity collection. Applied on every startup.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS players (
        id TEXT PRIMARY KEY NOT NULL,
        team_id TEXT,
        name TEXT NOT NULL,
        jersey_number INTEGER NOT NULL,
        position TEXT NOT NULL,
        status TEXT NOT NULL,
        age INTEGER NOT NULL,
        height INTEGER NOT NULL,
        weight INTEGER NOT NULL,
        preferred_foot TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS basics (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        diagram_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS principles (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        game_phase TEXT NOT NULL,
        description TEXT NOT NULL,
        coaching_notes TEXT,
        implementation_tips TEXT,
        media_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tactics (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        formation TEXT NOT NULL,
        description TEXT NOT NULL,
        diagram_url TEXT,
        suggested_drills TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS exercises (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        intensity TEXT NOT NULL,
        description TEXT NOT NULL,
        setup TEXT,
        variations TEXT,
        coaching_points TEXT,
        goalkeepers INTEGER NOT NULL DEFAULT 0,
        equipment TEXT,
        media_url TEXT,
        linked_basics TEXT,
        linked_principles TEXT,
        linked_tactics TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS training_sessions (
        id TEXT PRIMARY KEY NOT NULL,
        date DATE NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        focus TEXT NOT NULL,
        intensity TEXT NOT NULL,
        selected_players TEXT NOT NULL,
        selected_exercises TEXT NOT NULL
    )
    "#,
];

/// Names of the tables created by [`bootstrap_schema`]
pub const TABLES: &[&str] = &[
    "players",
    "basics",
    "principles",
    "tactics",
    "exercises",
    "training_sessions",
];

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://drillbook.db".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_MAX_CONNECTIONS".to_string())
                })?,
        })
    }

    /// Private in-memory store. SQLite gives every connection its own
    /// memory database, so the pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    /// Create a SQLite connection pool, creating the store file if absent,
    /// and make sure every collection table exists.
    pub async fn create_pool(&self) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        bootstrap_schema(&pool).await?;

        Ok(pool)
    }
}

/// Create any missing collection tables
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!(tables = TABLES.len(), "Schema bootstrap complete");
    Ok(())
}
