pub mod tactic_service;

pub use tactic_service::TacticService;
