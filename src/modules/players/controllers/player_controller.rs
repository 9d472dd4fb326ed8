use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::players::models::PlayerCreate;
use crate::modules::players::services::PlayerService;

/// List all players
/// GET /players
pub async fn list_players(
    service: web::Data<Arc<PlayerService>>,
) -> Result<HttpResponse, AppError> {
    let players = service.list_players().await?;
    Ok(HttpResponse::Ok().json(players))
}

/// Get player by ID
/// GET /players/{id}
pub async fn get_player(
    service: web::Data<Arc<PlayerService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let player = service.get_player(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(player))
}

/// Create a new player
/// POST /players
pub async fn create_player(
    service: web::Data<Arc<PlayerService>>,
    request: web::Json<PlayerCreate>,
) -> Result<HttpResponse, AppError> {
    let player = service.create_player(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(player))
}

/// Replace a player
/// PUT /players/{id}
pub async fn update_player(
    service: web::Data<Arc<PlayerService>>,
    path: web::Path<String>,
    request: web::Json<PlayerCreate>,
) -> Result<HttpResponse, AppError> {
    let player = service
        .update_player(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(player))
}

/// Delete a player
/// DELETE /players/{id}
pub async fn delete_player(
    service: web::Data<Arc<PlayerService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_player(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Deleted" })))
}

/// Configure player routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/players")
            .route("", web::get().to(list_players))
            .route("", web::post().to(create_player))
            .route("/{id}", web::get().to(get_player))
            .route("/{id}", web::put().to(update_player))
            .route("/{id}", web::delete().to(delete_player)),
    );
}
