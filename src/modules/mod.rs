use std::sync::Arc;

use actix_web::web;
use sqlx::SqlitePool;

use crate::middleware::json_config;

pub mod basics;
pub mod exercises;
pub mod health;
pub mod players;
pub mod principles;
pub mod tactics;
pub mod training_sessions;

/// Register every collection service and route against one shared pool.
///
/// Services are built once here and handed to handlers through app data;
/// each repository call borrows a pooled connection only for its own statement.
pub fn configure(pool: SqlitePool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let exercise_service = exercises::ExerciseService::new(Arc::new(
            exercises::ExerciseRepository::new(pool.clone()),
        ));
        let basic_service =
            basics::BasicService::new(Arc::new(basics::BasicRepository::new(pool.clone())));
        let principle_service = principles::PrincipleService::new(Arc::new(
            principles::PrincipleRepository::new(pool.clone()),
        ));
        let tactic_service =
            tactics::TacticService::new(Arc::new(tactics::TacticRepository::new(pool.clone())));
        let session_service = training_sessions::TrainingSessionService::new(Arc::new(
            training_sessions::TrainingSessionRepository::new(pool.clone()),
        ));
        let player_service =
            players::PlayerService::new(Arc::new(players::PlayerRepository::new(pool.clone())));

        cfg.app_data(json_config())
            .app_data(web::Data::new(pool))
            .app_data(web::Data::new(Arc::new(exercise_service)))
            .app_data(web::Data::new(Arc::new(basic_service)))
            .app_data(web::Data::new(Arc::new(principle_service)))
            .app_data(web::Data::new(Arc::new(tactic_service)))
            .app_data(web::Data::new(Arc::new(session_service)))
            .app_data(web::Data::new(Arc::new(player_service)));

        health::configure(cfg);
        exercises::configure(cfg);
        basics::configure(cfg);
        principles::configure(cfg);
        tactics::configure(cfg);
        training_sessions::configure(cfg);
        players::configure(cfg);
    }
}
