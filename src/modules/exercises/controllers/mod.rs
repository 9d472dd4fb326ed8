pub mod exercise_controller;

pub use exercise_controller::configure;
