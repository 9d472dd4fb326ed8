// Basics library: fundamental training drills

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Basic, BasicCreate};
pub use repositories::BasicRepository;
pub use services::BasicService;
