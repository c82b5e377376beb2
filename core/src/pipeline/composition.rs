// pipekit/src/pipeline/composition.rs

//! Right and left composition, as named methods and as the `>>` / `<<` operators.

use crate::core::Value;
use crate::error::PipeResult;
use crate::pipeline::definition::Pipeline;
use crate::stage::{parse, FunctionStage, IntoStage, Stage, StageRef};
use std::ops::{Shl, Shr};
use tracing::{event, Level};

impl Pipeline {
  /// `self >> other`: a new pipeline running `self`'s steps, then `other`'s.
  /// Neither operand is modified.
  pub fn compose_right(&self, other: impl IntoStage) -> Pipeline {
    self.compose_right_stage(other.into_stage())
  }

  /// `self << other`: a new pipeline running `other`'s steps, then `self`'s.
  ///
  /// `a << b` has the same chain as `b >> a`. The result carries `self`'s label.
  pub fn compose_left(&self, other: impl IntoStage) -> Pipeline {
    self.compose_left_stage(other.into_stage())
  }

  /// [`Pipeline::compose_right`] for a dynamic value. Fails with
  /// `PipeError::TypeMismatch` if `other` is neither a stage nor callable.
  pub fn compose_right_value(&self, other: Value) -> PipeResult<Pipeline> {
    Ok(self.compose_right_stage(parse(other)?))
  }

  /// [`Pipeline::compose_left`] for a dynamic value.
  pub fn compose_left_value(&self, other: Value) -> PipeResult<Pipeline> {
    Ok(self.compose_left_stage(parse(other)?))
  }

  fn compose_right_stage(&self, other: StageRef) -> Pipeline {
    event!(
      Level::DEBUG,
      label = self.label().unwrap_or_default(),
      left_steps = self.len(),
      other = other.kind(),
      "Composing right."
    );
    other.extend_into(self.copy())
  }

  fn compose_left_stage(&self, other: StageRef) -> Pipeline {
    event!(
      Level::DEBUG,
      label = self.label().unwrap_or_default(),
      right_steps = self.len(),
      other = other.kind(),
      "Composing left."
    );
    let seed = Pipeline::seeded(self.label_arc(), &*other);
    self.extend_into(seed)
  }
}

impl<S: IntoStage> Shr<S> for Pipeline {
  type Output = Pipeline;

  fn shr(self, rhs: S) -> Pipeline {
    self.compose_right(rhs)
  }
}

impl<S: IntoStage> Shr<S> for &Pipeline {
  type Output = Pipeline;

  fn shr(self, rhs: S) -> Pipeline {
    self.compose_right(rhs)
  }
}

impl<S: IntoStage> Shl<S> for Pipeline {
  type Output = Pipeline;

  fn shl(self, rhs: S) -> Pipeline {
    self.compose_left(rhs)
  }
}

impl<S: IntoStage> Shl<S> for &Pipeline {
  type Output = Pipeline;

  fn shl(self, rhs: S) -> Pipeline {
    self.compose_left(rhs)
  }
}

// A bare function stage composes as the one-step pipeline it would build.

impl<S: IntoStage> Shr<S> for FunctionStage {
  type Output = Pipeline;

  fn shr(self, rhs: S) -> Pipeline {
    Pipeline::from_stage(self).compose_right(rhs)
  }
}

impl<S: IntoStage> Shr<S> for &FunctionStage {
  type Output = Pipeline;

  fn shr(self, rhs: S) -> Pipeline {
    Pipeline::from_stage(self).compose_right(rhs)
  }
}

impl<S: IntoStage> Shl<S> for FunctionStage {
  type Output = Pipeline;

  fn shl(self, rhs: S) -> Pipeline {
    Pipeline::from_stage(self).compose_left(rhs)
  }
}

impl<S: IntoStage> Shl<S> for &FunctionStage {
  type Output = Pipeline;

  fn shl(self, rhs: S) -> Pipeline {
    Pipeline::from_stage(self).compose_left(rhs)
  }
}
