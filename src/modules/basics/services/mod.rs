pub mod basic_service;

pub use basic_service::BasicService;
