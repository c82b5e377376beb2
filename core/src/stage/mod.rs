// pipekit/src/stage/mod.rs

//! Defines the `Stage` capability: anything that can append its steps onto a
//! pipeline's chain.

pub mod function;
pub mod mapping;
pub mod parse;

pub use function::FunctionStage;
pub use mapping::{MappingStage, MAP};
pub use parse::{parse, IntoStage};

use crate::pipeline::Pipeline;
use std::fmt;
use std::sync::Arc;

/// A pipeline building block.
///
/// `extend_into` receives the pipeline being built and returns the pipeline composition
/// continues with. Most stages append to `target` and hand it back; a stage may also
/// return a different pipeline altogether (see [`MappingStage`]).
pub trait Stage: fmt::Debug + Send + Sync {
  fn extend_into(&self, target: Pipeline) -> Pipeline;

  /// Short human readable name of the stage type.
  fn kind(&self) -> &'static str;
}

/// Shared, type-erased stage.
pub type StageRef = Arc<dyn Stage>;
