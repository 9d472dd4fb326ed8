// Training sessions: scheduled practice plans

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{TrainingSession, TrainingSessionCreate};
pub use repositories::TrainingSessionRepository;
pub use services::TrainingSessionService;
