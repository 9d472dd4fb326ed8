use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::tactics::models::TacticCreate;
use crate::modules::tactics::services::TacticService;

/// List all tactics
/// GET /tactics
pub async fn list_tactics(
    service: web::Data<Arc<TacticService>>,
) -> Result<HttpResponse, AppError> {
    let tactics = service.list_tactics().await?;
    Ok(HttpResponse::Ok().json(tactics))
}

/// Get tactic by ID
/// GET /tactics/{id}
pub async fn get_tactic(
    service: web::Data<Arc<TacticService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let tactic = service.get_tactic(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tactic))
}

/// Create a new tactic
/// POST /tactics
pub async fn create_tactic(
    service: web::Data<Arc<TacticService>>,
    request: web::Json<TacticCreate>,
) -> Result<HttpResponse, AppError> {
    let tactic = service.create_tactic(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(tactic))
}

/// Replace a tactic
/// PUT /tactics/{id}
pub async fn update_tactic(
    service: web::Data<Arc<TacticService>>,
    path: web::Path<String>,
    request: web::Json<TacticCreate>,
) -> Result<HttpResponse, AppError> {
    let tactic = service
        .update_tactic(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(tactic))
}

/// Delete a tactic
/// DELETE /tactics/{id}
pub async fn delete_tactic(
    service: web::Data<Arc<TacticService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_tactic(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Deleted" })))
}

/// Configure tactic routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tactics")
            .route("", web::get().to(list_tactics))
            .route("", web::post().to(create_tactic))
            .route("/{id}", web::get().to(get_tactic))
            .route("/{id}", web::put().to(update_tactic))
            .route("/{id}", web::delete().to(delete_tactic)),
    );
}
