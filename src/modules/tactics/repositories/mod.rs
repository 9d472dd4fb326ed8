pub mod tactic_repository;

pub use tactic_repository::TacticRepository;
