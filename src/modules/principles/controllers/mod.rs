pub mod principle_controller;

pub use principle_controller::configure;
