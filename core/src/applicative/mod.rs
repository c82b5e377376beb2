// pipekit/src/applicative/mod.rs

//! Bound, not-yet-executed applications that run when piped into a pipeline
//! (`applicative | &pipeline`).

pub mod apply;
pub mod map;

pub use apply::ApplyRequest;
pub use map::MapApplication;

use crate::core::Value;
use crate::error::PipeResult;
use crate::pipeline::Pipeline;

/// Something that can be applied to a pipeline.
pub trait Applicative {
  fn to(&self, pipeline: &Pipeline) -> PipeResult<Value>;
}
