// Players: the coached squad

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Player, PlayerCreate};
pub use repositories::PlayerRepository;
pub use services::PlayerService;
