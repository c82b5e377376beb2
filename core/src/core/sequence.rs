// pipekit/src/core/sequence.rs

//! Defines `LazySeq`, the lazily evaluated sequence produced by mapping steps.

use crate::core::args::Args;
use crate::core::value::Value;
use crate::error::PipeResult;
use crate::pipeline::Pipeline;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Boxed element iterator of a lazy sequence.
pub type SeqIter = Box<dyn Iterator<Item = PipeResult<Value>> + Send>;

#[derive(Clone)]
enum Source {
  /// Materialized elements. Can be walked any number of times.
  Items(Arc<[Value]>),
  /// A one-shot iterator. The first walk takes it; later walks see an exhausted sequence.
  Once(Arc<Mutex<Option<SeqIter>>>),
}

/// A lazily evaluated sequence, optionally with a per-element transform.
///
/// Nothing runs until the sequence is iterated. A sequence over materialized items is
/// restartable; a sequence over another lazy source is single-pass.
#[derive(Clone)]
pub struct LazySeq {
  source: Source,
  transform: Option<Pipeline>,
}

impl LazySeq {
  /// A restartable sequence over `items`.
  pub fn from_values(items: Vec<Value>) -> Self {
    Self {
      source: Source::Items(items.into()),
      transform: None,
    }
  }

  /// A single-pass sequence over an arbitrary iterator.
  pub fn once(iter: impl Iterator<Item = PipeResult<Value>> + Send + 'static) -> Self {
    Self {
      source: Source::Once(Arc::new(Mutex::new(Some(Box::new(iter))))),
      transform: None,
    }
  }

  /// Lazily applies `pipeline` to every element.
  ///
  /// Mapping an already mapped sequence fuses both transforms into one pipeline, so the
  /// result keeps the restartability of the original source.
  pub fn map(self, pipeline: Pipeline) -> Self {
    let transform = match self.transform {
      Some(existing) => existing.compose_right(pipeline),
      None => pipeline,
    };
    Self {
      source: self.source,
      transform: Some(transform),
    }
  }

  pub fn is_restartable(&self) -> bool {
    matches!(self.source, Source::Items(_))
  }

  /// Same source and the same per-element transform.
  pub(crate) fn same_view(&self, other: &LazySeq) -> bool {
    let same_source = match (&self.source, &other.source) {
      (Source::Items(a), Source::Items(b)) => Arc::ptr_eq(a, b),
      (Source::Once(a), Source::Once(b)) => Arc::ptr_eq(a, b),
      _ => false,
    };
    let same_transform = match (&self.transform, &other.transform) {
      (None, None) => true,
      (Some(a), Some(b)) => a.chain() == b.chain(),
      _ => false,
    };
    same_source && same_transform
  }

  /// Starts a walk over the sequence. Transform errors surface per element.
  pub fn iter(&self) -> SeqIter {
    let base: SeqIter = match &self.source {
      Source::Items(items) => {
        let items = Arc::clone(items);
        Box::new(
          (0..items.len()).map(move |i| -> PipeResult<Value> { Ok(items[i].clone()) }),
        )
      }
      Source::Once(slot) => match slot.lock().take() {
        Some(iter) => iter,
        None => Box::new(std::iter::empty()),
      },
    };
    match &self.transform {
      Some(pipeline) => {
        let pipeline = pipeline.clone();
        Box::new(base.map(move |item| item.and_then(|value| pipeline.apply(Args::unary(value)))))
      }
      None => base,
    }
  }

  /// Walks the sequence to its end, stopping at the first error.
  pub fn collect_vec(&self) -> PipeResult<Vec<Value>> {
    self.iter().collect()
  }
}

impl fmt::Debug for LazySeq {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LazySeq")
      .field("restartable", &self.is_restartable())
      .field("transform_steps", &self.transform.as_ref().map_or(0, Pipeline::len))
      .finish()
  }
}
