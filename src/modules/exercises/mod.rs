// Exercises library: drills linked to basics, principles and tactics

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Exercise, ExerciseCreate};
pub use repositories::ExerciseRepository;
pub use services::ExerciseService;
