pub mod exercise_repository;

pub use exercise_repository::ExerciseRepository;
