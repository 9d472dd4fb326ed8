// Tactics library: formations and team tactics

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Tactic, TacticCreate};
pub use repositories::TacticRepository;
pub use services::TacticService;
