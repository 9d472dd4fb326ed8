use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::basics::models::BasicCreate;
use crate::modules::basics::services::BasicService;

/// List all basics
/// GET /basics
pub async fn list_basics(
    service: web::Data<Arc<BasicService>>,
) -> Result<HttpResponse, AppError> {
    let basics = service.list_basics().await?;
    Ok(HttpResponse::Ok().json(basics))
}

/// Get basic by ID
/// GET /basics/{id}
pub async fn get_basic(
    service: web::Data<Arc<BasicService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let basic = service.get_basic(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(basic))
}

/// Create a new basic
/// POST /basics
pub async fn create_basic(
    service: web::Data<Arc<BasicService>>,
    request: web::Json<BasicCreate>,
) -> Result<HttpResponse, AppError> {
    let basic = service.create_basic(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(basic))
}

/// Replace a basic
/// PUT /basics/{id}
pub async fn update_basic(
    service: web::Data<Arc<BasicService>>,
    path: web::Path<String>,
    request: web::Json<BasicCreate>,
) -> Result<HttpResponse, AppError> {
    let basic = service
        .update_basic(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(basic))
}

/// Delete a basic
/// DELETE /basics/{id}
pub async fn delete_basic(
    service: web::Data<Arc<BasicService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_basic(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Deleted" })))
}

/// Configure basic routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/basics")
            .route("", web::get().to(list_basics))
            .route("", web::post().to(create_basic))
            .route("/{id}", web::get().to(get_basic))
            .route("/{id}", web::put().to(update_basic))
            .route("/{id}", web::delete().to(delete_basic)),
    );
}
