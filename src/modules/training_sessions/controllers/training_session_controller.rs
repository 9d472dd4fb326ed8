use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::training_sessions::models::TrainingSessionCreate;
use crate::modules::training_sessions::services::TrainingSessionService;

/// List all training sessions
/// GET /training_sessions
pub async fn list_sessions(
    service: web::Data<Arc<TrainingSessionService>>,
) -> Result<HttpResponse, AppError> {
    let sessions = service.list_sessions().await?;
    Ok(HttpResponse::Ok().json(sessions))
}

/// Get training session by ID
/// GET /training_sessions/{id}
pub async fn get_session(
    service: web::Data<Arc<TrainingSessionService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = service.get_session(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(session))
}

/// Create a new training session
/// POST /training_sessions
pub async fn create_session(
    service: web::Data<Arc<TrainingSessionService>>,
    request: web::Json<TrainingSessionCreate>,
) -> Result<HttpResponse, AppError> {
    let session = service.create_session(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(session))
}

/// Replace a training session
/// PUT /training_sessions/{id}
pub async fn update_session(
    service: web::Data<Arc<TrainingSessionService>>,
    path: web::Path<String>,
    request: web::Json<TrainingSessionCreate>,
) -> Result<HttpResponse, AppError> {
    let session = service
        .update_session(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(session))
}

/// Delete a training session
/// DELETE /training_sessions/{id}
pub async fn delete_session(
    service: web::Data<Arc<TrainingSessionService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_session(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Deleted" })))
}

/// Configure training session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/training_sessions")
            .route("", web::get().to(list_sessions))
            .route("", web::post().to(create_session))
            .route("/{id}", web::get().to(get_session))
            .route("/{id}", web::put().to(update_session))
            .route("/{id}", web::delete().to(delete_session)),
    );
}
