pub mod training_session_controller;

pub use training_session_controller::configure;
