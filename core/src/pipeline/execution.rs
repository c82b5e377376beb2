// pipekit/src/pipeline/execution.rs

//! Contains `Pipeline::apply`, the left fold of a chain over its arguments.

use crate::core::{Args, Value};
use crate::error::{PipeError, PipeResult};
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, Level};

impl Pipeline {
  /// Applies the pipeline to `args`.
  ///
  /// The first step receives `args` as is; every later step receives the previous
  /// step's result as its single argument. The first error from a step is returned
  /// unchanged and stops the fold.
  ///
  /// Fails with `PipeError::EmptyPipeline` if the chain has no steps.
  #[instrument(
    name = "Pipeline::apply",
    skip_all,
    fields(
      label = self.label().unwrap_or_default(),
      num_steps = self.len(),
    )
  )]
  pub fn apply(&self, args: Args) -> PipeResult<Value> {
    let mut steps = self.chain.iter();
    let first = steps.next().ok_or_else(|| PipeError::EmptyPipeline {
      label: self.label().map(str::to_string),
    })?;

    event!(
      Level::TRACE,
      positional = args.positional().len(),
      keyword = args.keyword().len(),
      "Applying first step."
    );
    let mut acc = first.invoke(args)?;

    for (step_idx, step) in steps.enumerate() {
      event!(
        Level::TRACE,
        step_index = step_idx + 1,
        input_type = acc.type_name(),
        "Applying step."
      );
      acc = step.invoke_unary(acc)?;
    }

    event!(Level::TRACE, output_type = acc.type_name(), "Pipeline application finished.");
    Ok(acc)
  }

  /// Invokes the pipeline; same as [`Pipeline::apply`].
  pub fn call(&self, args: Args) -> PipeResult<Value> {
    self.apply(args)
  }

  /// Applies the pipeline to a single positional argument.
  pub fn apply_one(&self, value: impl Into<Value>) -> PipeResult<Value> {
    self.apply(Args::unary(value))
  }
}
