pub mod tactic_controller;

pub use tactic_controller::configure;
