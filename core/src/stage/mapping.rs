// pipekit/src/stage/mapping.rs

//! The mapping stage: applies a pipeline element-wise over a sequence.

use crate::applicative::MapApplication;
use crate::core::{Callable, Value};
use crate::pipeline::Pipeline;
use crate::stage::Stage;
use tracing::{event, Level};

/// Stateless mapping stage. Use the shared [`MAP`] value.
///
/// Merged into a pipeline, it replaces the pipeline built so far with a single step
/// that lazily maps that pipeline over an input sequence:
///
/// ```
/// use pipekit::{Args, FunctionStage, Value, MAP, PIPE};
///
/// let inc = FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? + 1)));
/// let each = &PIPE >> inc >> MAP;
/// let out = each.call(Args::unary(vec![1, 2, 3])).unwrap();
/// assert_eq!(out.into_vec().unwrap(), vec![Value::Int(2), Value::Int(3), Value::Int(4)]);
/// ```
///
/// Called with a sequence, it builds a [`MapApplication`] instead, to be piped into a
/// pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MappingStage;

/// The shared mapping stage.
pub static MAP: MappingStage = MappingStage;

impl MappingStage {
  /// Binds `sequence` for a later mapped application. Nothing runs yet.
  pub fn call(&self, sequence: impl Into<Value>) -> MapApplication {
    MapApplication::new(sequence.into())
  }
}

impl Stage for MappingStage {
  fn extend_into(&self, target: Pipeline) -> Pipeline {
    event!(Level::TRACE, mapped_steps = target.len(), "Installing mapping step.");
    let mut mapped = Pipeline::with_label(target.label_arc());
    let step = Callable::unary(move |sequence: Value| {
      Ok(Value::Seq(sequence.into_seq()?.map(target.clone())))
    });
    mapped.push(step);
    mapped
  }

  fn kind(&self) -> &'static str {
    "mapping stage"
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::Args;
  use crate::error::PipeError;
  use crate::stage::FunctionStage;

  fn double() -> FunctionStage {
    FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? * 2)))
  }

  #[test]
  fn merging_replaces_chain_with_single_step() {
    let pipeline = Pipeline::from_stage(double()).compose_right(MAP);
    assert_eq!(pipeline.len(), 1);
  }

  #[test]
  fn mapped_step_returns_lazy_view() {
    let pipeline = Pipeline::from_stage(double()).compose_right(MAP);
    let out = pipeline.apply(Args::unary(vec![1, 2, 3])).unwrap();
    match &out {
      Value::Seq(seq) => assert!(seq.is_restartable()),
      other => panic!("Expected a lazy sequence, got {:?}", other),
    }
    assert_eq!(out.into_vec().unwrap(), vec![Value::Int(2), Value::Int(4), Value::Int(6)]);
  }

  #[test]
  fn mapped_step_rejects_scalars_at_call_time() {
    let pipeline = Pipeline::from_stage(double()).compose_right(MAP);
    let err = pipeline.apply(Args::unary(7)).unwrap_err();
    assert!(matches!(err, PipeError::UnexpectedValue { expected: "sequence", .. }));
  }

  #[test]
  fn keeps_the_label_of_the_target() {
    let pipeline = Pipeline::named("tokens").compose_right(double()).compose_right(MAP);
    assert_eq!(pipeline.label(), Some("tokens"));
  }
}
