// pipekit/src/stage/parse.rs

//! Normalization of composition inputs into stages.

use crate::core::{Callable, Value};
use crate::error::{PipeError, PipeResult};
use crate::pipeline::Pipeline;
use crate::stage::{FunctionStage, MappingStage, Stage, StageRef};
use std::sync::Arc;

/// Normalizes a dynamic value into a stage.
///
/// Stages pass through untouched, callables are wrapped in a [`FunctionStage`], and
/// anything else fails with `PipeError::TypeMismatch`.
pub fn parse(value: Value) -> PipeResult<StageRef> {
  match value {
    Value::Stage(stage) => Ok(stage),
    Value::Callable(func) => Ok(Arc::new(FunctionStage::from(func))),
    other => Err(PipeError::TypeMismatch {
      type_name: other.type_name().to_string(),
    }),
  }
}

/// Statically typed normalization, used by the composition operators.
///
/// Every implementor is already a stage or a callable, so the conversion can't fail.
pub trait IntoStage {
  fn into_stage(self) -> StageRef;
}

impl IntoStage for StageRef {
  fn into_stage(self) -> StageRef {
    self
  }
}

impl IntoStage for Pipeline {
  fn into_stage(self) -> StageRef {
    Arc::new(self)
  }
}

impl IntoStage for &Pipeline {
  fn into_stage(self) -> StageRef {
    Arc::new(self.copy())
  }
}

impl IntoStage for FunctionStage {
  fn into_stage(self) -> StageRef {
    Arc::new(self)
  }
}

impl IntoStage for &FunctionStage {
  fn into_stage(self) -> StageRef {
    Arc::new(self.clone())
  }
}

impl IntoStage for MappingStage {
  fn into_stage(self) -> StageRef {
    Arc::new(self)
  }
}

impl IntoStage for Callable {
  fn into_stage(self) -> StageRef {
    Arc::new(FunctionStage::from(self))
  }
}
