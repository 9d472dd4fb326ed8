pub mod basic;

pub use basic::{Basic, BasicCreate};
