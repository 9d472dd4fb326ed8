pub mod training_session_service;

pub use training_session_service::TrainingSessionService;
