pub mod args;
pub mod callable;
pub mod sequence;
pub mod value;

// Re-export key types for easier access from other pipekit modules (and lib.rs)
pub use args::Args;
pub use callable::Callable;
pub use sequence::LazySeq;
pub use value::Value;
