use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::exercises::models::ExerciseCreate;
use crate::modules::exercises::services::ExerciseService;

/// List all exercises
/// GET /exercises
pub async fn list_exercises(
    service: web::Data<Arc<ExerciseService>>,
) -> Result<HttpResponse, AppError> {
    let exercises = service.list_exercises().await?;
    Ok(HttpResponse::Ok().json(exercises))
}

/// Get exercise by ID
/// GET /exercises/{id}
pub async fn get_exercise(
    service: web::Data<Arc<ExerciseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let exercise = service.get_exercise(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(exercise))
}

/// Create a new exercise
/// POST /exercises
pub async fn create_exercise(
    service: web::Data<Arc<ExerciseService>>,
    request: web::Json<ExerciseCreate>,
) -> Result<HttpResponse, AppError> {
    let exercise = service.create_exercise(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(exercise))
}

/// Replace an exercise
/// PUT /exercises/{id}
pub async fn update_exercise(
    service: web::Data<Arc<ExerciseService>>,
    path: web::Path<String>,
    request: web::Json<ExerciseCreate>,
) -> Result<HttpResponse, AppError> {
    let exercise = service
        .update_exercise(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(exercise))
}

/// Delete an exercise
/// DELETE /exercises/{id}
pub async fn delete_exercise(
    service: web::Data<Arc<ExerciseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_exercise(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Deleted" })))
}

/// Configure exercise routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/exercises")
            .route("", web::get().to(list_exercises))
            .route("", web::post().to(create_exercise))
            .route("/{id}", web::get().to(get_exercise))
            .route("/{id}", web::put().to(update_exercise))
            .route("/{id}", web::delete().to(delete_exercise)),
    );
}
