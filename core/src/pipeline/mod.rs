// pipekit/src/pipeline/mod.rs

//! Defines the `Pipeline` struct, its construction, composition, and application logic.

pub mod chain;
pub mod composition;
pub mod definition;
pub mod execution;

// Re-export the main Pipeline struct
pub use chain::Chain;
pub use definition::{Pipeline, PIPE};
