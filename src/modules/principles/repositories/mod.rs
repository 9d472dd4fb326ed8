pub mod principle_repository;

pub use principle_repository::PrincipleRepository;
