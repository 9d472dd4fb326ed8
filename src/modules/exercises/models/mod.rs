pub mod exercise;

pub use exercise::{Exercise, ExerciseCreate};
