//! Drillbook coaching record store
//!
//! HTTP backend that stores exercises, basics, principles, tactics,
//! training sessions and players, with create/read/update/delete per collection.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::basics;
pub use modules::exercises;
pub use modules::players;
pub use modules::principles;
pub use modules::tactics;
pub use modules::training_sessions;
