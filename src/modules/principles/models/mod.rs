pub mod principle;

pub use principle::{Principle, PrincipleCreate};
