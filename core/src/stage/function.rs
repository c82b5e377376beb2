// pipekit/src/stage/function.rs

use crate::core::{Args, Callable, Value};
use crate::error::PipeResult;
use crate::pipeline::Pipeline;
use crate::stage::Stage;
use tracing::{event, Level};

/// Adapter turning a single callable into a [`Stage`].
#[derive(Clone, Debug)]
pub struct FunctionStage {
  func: Callable,
}

impl FunctionStage {
  /// Wraps a one-argument function.
  pub fn new(f: impl Fn(Value) -> PipeResult<Value> + Send + Sync + 'static) -> Self {
    Self {
      func: Callable::unary(f),
    }
  }

  /// Wraps a function over the full argument set. Meant for the first position of a
  /// pipeline, where the original `Args` are still available.
  pub fn variadic(f: impl Fn(Args) -> PipeResult<Value> + Send + Sync + 'static) -> Self {
    Self {
      func: Callable::variadic(f),
    }
  }

  pub fn callable(&self) -> &Callable {
    &self.func
  }
}

impl From<Callable> for FunctionStage {
  fn from(func: Callable) -> Self {
    Self { func }
  }
}

impl Stage for FunctionStage {
  fn extend_into(&self, mut target: Pipeline) -> Pipeline {
    event!(Level::TRACE, callable = ?self.func, "Appending function stage.");
    target.push(self.func.clone());
    target
  }

  fn kind(&self) -> &'static str {
    "function stage"
  }
}
