use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::principles::models::PrincipleCreate;
use crate::modules::principles::services::PrincipleService;

/// List all principles
/// GET /principles
pub async fn list_principles(
    service: web::Data<Arc<PrincipleService>>,
) -> Result<HttpResponse, AppError> {
    let principles = service.list_principles().await?;
    Ok(HttpResponse::Ok().json(principles))
}

/// Get principle by ID
/// GET /principles/{id}
pub async fn get_principle(
    service: web::Data<Arc<PrincipleService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let principle = service.get_principle(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(principle))
}

/// Create a new principle
/// POST /principles
pub async fn create_principle(
    service: web::Data<Arc<PrincipleService>>,
    request: web::Json<PrincipleCreate>,
) -> Result<HttpResponse, AppError> {
    let principle = service.create_principle(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(principle))
}

/// Replace a principle
/// PUT /principles/{id}
pub async fn update_principle(
    service: web::Data<Arc<PrincipleService>>,
    path: web::Path<String>,
    request: web::Json<PrincipleCreate>,
) -> Result<HttpResponse, AppError> {
    let principle = service
        .update_principle(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(principle))
}

/// Delete a principle
/// DELETE /principles/{id}
pub async fn delete_principle(
    service: web::Data<Arc<PrincipleService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_principle(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Deleted" })))
}

/// Configure principle routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/principles")
            .route("", web::get().to(list_principles))
            .route("", web::post().to(create_principle))
            .route("/{id}", web::get().to(get_principle))
            .route("/{id}", web::put().to(update_principle))
            .route("/{id}", web::delete().to(delete_principle)),
    );
}
