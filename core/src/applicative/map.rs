// pipekit/src/applicative/map.rs

use crate::applicative::Applicative;
use crate::core::{Args, Value};
use crate::error::PipeResult;
use crate::pipeline::Pipeline;
use std::ops::BitOr;
use tracing::{event, instrument, Level};

/// A sequence bound for element-wise application. Built with `MAP.call(sequence)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MapApplication {
  sequence: Value,
}

impl MapApplication {
  pub fn new(sequence: Value) -> Self {
    Self { sequence }
  }

  pub fn sequence(&self) -> &Value {
    &self.sequence
  }
}

impl Applicative for MapApplication {
  /// Applies `pipeline` to every element, eagerly, collecting the results in input
  /// order. The first failing element's error is returned.
  ///
  /// A bound lazy sequence is single-pass: applying the same `MapApplication` twice
  /// sees an exhausted sequence the second time.
  #[instrument(
    name = "MapApplication::to",
    skip_all,
    fields(
      label = pipeline.label().unwrap_or_default(),
      num_steps = pipeline.len(),
      sequence_type = self.sequence.type_name(),
    )
  )]
  fn to(&self, pipeline: &Pipeline) -> PipeResult<Value> {
    let seq = self.sequence.clone().into_seq()?;
    let mut results = Vec::new();
    for item in seq.iter() {
      results.push(pipeline.apply(Args::unary(item?))?);
    }
    event!(Level::DEBUG, num_elements = results.len(), "Mapped application finished.");
    Ok(Value::List(results))
  }
}

impl BitOr<&Pipeline> for MapApplication {
  type Output = PipeResult<Value>;

  fn bitor(self, pipeline: &Pipeline) -> PipeResult<Value> {
    self.to(pipeline)
  }
}

impl BitOr<Pipeline> for MapApplication {
  type Output = PipeResult<Value>;

  fn bitor(self, pipeline: Pipeline) -> PipeResult<Value> {
    self.to(&pipeline)
  }
}
