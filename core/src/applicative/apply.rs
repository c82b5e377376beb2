// pipekit/src/applicative/apply.rs

use crate::applicative::Applicative;
use crate::core::{Args, Value};
use crate::error::PipeResult;
use crate::pipeline::Pipeline;
use std::ops::BitOr;

/// Captured arguments, forwarded to `Pipeline::apply` when piped into a pipeline.
///
/// ```
/// use pipekit::{ApplyRequest, Args, FunctionStage, Pipeline, Value};
///
/// let sum = Pipeline::from_stage(FunctionStage::variadic(|args: Args| {
///   let mut total = 0;
///   for v in args.positional() {
///     total += v.as_int()?;
///   }
///   Ok(Value::Int(total))
/// }));
/// let out = ApplyRequest::new(Args::new().arg(1).arg(2)) | &sum;
/// assert_eq!(out.unwrap(), Value::Int(3));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplyRequest {
  args: Args,
}

impl ApplyRequest {
  pub fn new(args: Args) -> Self {
    Self { args }
  }

  pub fn args(&self) -> &Args {
    &self.args
  }
}

impl From<Args> for ApplyRequest {
  fn from(args: Args) -> Self {
    Self::new(args)
  }
}

impl Applicative for ApplyRequest {
  fn to(&self, pipeline: &Pipeline) -> PipeResult<Value> {
    pipeline.apply(self.args.clone())
  }
}

impl BitOr<&Pipeline> for ApplyRequest {
  type Output = PipeResult<Value>;

  fn bitor(self, pipeline: &Pipeline) -> PipeResult<Value> {
    // Consumed here, so hand over the arguments without cloning.
    pipeline.apply(self.args)
  }
}

impl BitOr<Pipeline> for ApplyRequest {
  type Output = PipeResult<Value>;

  fn bitor(self, pipeline: Pipeline) -> PipeResult<Value> {
    pipeline.apply(self.args)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::PipeError;
  use crate::stage::FunctionStage;

  #[test]
  fn forwards_arguments_unchanged() {
    let echo = Pipeline::from_stage(FunctionStage::variadic(|args: Args| {
      let (positional, keyword) = args.into_parts();
      Ok(Value::from(vec![Value::List(positional), Value::Dict(keyword)]))
    }));
    let request = ApplyRequest::new(Args::new().arg(1).arg(2).kwarg("k", 3));
    let out = request.to(&echo).unwrap();
    let parts = out.as_list().unwrap();
    assert_eq!(parts[0], Value::from(vec![1, 2]));
    assert_eq!(parts[1].type_name(), "dict");
  }

  #[test]
  fn request_keeps_its_arguments_for_reuse() {
    let request = ApplyRequest::from(Args::unary(4));
    let inc = Pipeline::from_stage(FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? + 1))));
    assert_eq!(request.to(&inc).unwrap(), Value::Int(5));
    assert_eq!(request.args(), &Args::unary(4));
    assert_eq!(request.to(&inc).unwrap(), Value::Int(5));
  }

  #[test]
  fn propagates_empty_pipeline_error() {
    let out = ApplyRequest::new(Args::unary(1)) | Pipeline::new();
    assert!(matches!(out, Err(PipeError::EmptyPipeline { .. })));
  }
}
