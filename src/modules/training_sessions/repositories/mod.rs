pub mod training_session_repository;

pub use training_session_repository::TrainingSessionRepository;
