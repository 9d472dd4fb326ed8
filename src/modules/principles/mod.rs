// Principles library: tactical principles per game phase

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Principle, PrincipleCreate};
pub use repositories::PrincipleRepository;
pub use services::PrincipleService;
