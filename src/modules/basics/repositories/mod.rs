pub mod basic_repository;

pub use basic_repository::BasicRepository;
