pub mod basic_controller;

pub use basic_controller::configure;
