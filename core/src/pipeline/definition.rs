// pipekit/src/pipeline/definition.rs

//! Contains the `Pipeline` struct definition and the methods that build and copy its
//! chain.

use crate::core::{Callable, Value};
use crate::error::PipeResult;
use crate::pipeline::chain::Chain;
use crate::stage::{IntoStage, Stage};
use std::sync::Arc;
use tracing::{event, Level};

/// An ordered chain of callables, applied first-to-last.
///
/// A pipeline is only appended to while it is being composed; every composition
/// operator works on a fresh copy, so a pipeline never observes changes made through
/// pipelines derived from it.
///
/// The optional label names the pipeline in tracing output and in
/// `PipeError::EmptyPipeline`. Copies and pipelines seeded by [`Pipeline::compose_left`]
/// keep the label of the pipeline they were derived from.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
  label: Option<Arc<str>>,
  pub(crate) chain: Chain,
}

/// Empty, unlabeled pipeline to start declarative chains from: `&PIPE >> f >> g`.
pub static PIPE: Pipeline = Pipeline::new();

impl Pipeline {
  /// Creates an empty, unlabeled pipeline.
  pub const fn new() -> Self {
    Self {
      label: None,
      chain: Chain::new(),
    }
  }

  /// Creates an empty pipeline with a label.
  pub fn named(label: impl Into<Arc<str>>) -> Self {
    Self::with_label(Some(label.into()))
  }

  pub(crate) fn with_label(label: Option<Arc<str>>) -> Self {
    Self {
      label,
      chain: Chain::new(),
    }
  }

  /// Builds a pipeline pre-populated with the steps of `stage`.
  pub fn from_stage(stage: impl IntoStage) -> Self {
    stage.into_stage().extend_into(Pipeline::new())
  }

  /// Like [`Pipeline::from_stage`], for a dynamic value. Fails with
  /// `PipeError::TypeMismatch` when `value` is neither a stage nor callable.
  pub fn from_value(value: Value) -> PipeResult<Self> {
    Ok(crate::stage::parse(value)?.extend_into(Pipeline::new()))
  }

  pub(crate) fn seeded(label: Option<Arc<str>>, stage: &dyn Stage) -> Self {
    stage.extend_into(Self::with_label(label))
  }

  pub fn label(&self) -> Option<&str> {
    self.label.as_deref()
  }

  pub(crate) fn label_arc(&self) -> Option<Arc<str>> {
    self.label.clone()
  }

  pub fn chain(&self) -> &Chain {
    &self.chain
  }

  pub fn len(&self) -> usize {
    self.chain.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chain.is_empty()
  }

  /// Shallow copy: a new chain holding the same callables.
  pub fn copy(&self) -> Self {
    Self {
      label: self.label.clone(),
      chain: self.chain.clone(),
    }
  }

  pub(crate) fn push(&mut self, func: Callable) {
    self.chain.push(func);
  }
}

impl Stage for Pipeline {
  /// Appends this pipeline's whole chain, in order, onto `target`.
  fn extend_into(&self, mut target: Pipeline) -> Pipeline {
    event!(
      Level::TRACE,
      source_label = self.label().unwrap_or_default(),
      appended_steps = self.len(),
      target_steps = target.len(),
      "Extending pipeline."
    );
    target.chain.extend_from(&self.chain);
    target
  }

  fn kind(&self) -> &'static str {
    "pipeline"
  }
}
