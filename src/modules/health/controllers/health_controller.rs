use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

/// GET /health - Liveness probe
/// Does not touch the store
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "drillbook".to_string(),
    })
}

/// GET /ready - Readiness probe
/// Returns 503 when the store cannot answer a trivial query
pub async fn readiness_check(pool: web::Data<SqlitePool>) -> impl Responder {
    let database = match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Database readiness check failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready: database,
        database,
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
