// Test Database Helpers
//
// Every test gets its own private in-memory store with all collection tables.

use drillbook::config::DatabaseConfig;
use sqlx::SqlitePool;

/// Create an isolated in-memory SQLite pool with the schema applied
///
/// # Panics
/// If the in-memory store cannot be opened or bootstrapped
pub async fn create_test_pool() -> SqlitePool {
    DatabaseConfig::in_memory()
        .create_pool()
        .await
        .unwrap_or_else(|e| panic!("Failed to open in-memory test database: {}", e))
}

/// Count rows in a collection table
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to count rows in {}: {}", table, e))
}
