pub mod principle_service;

pub use principle_service::PrincipleService;
