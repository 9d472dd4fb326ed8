pub mod tactic;

pub use tactic::{Tactic, TacticCreate};
