pub mod player_controller;

pub use player_controller::configure;
