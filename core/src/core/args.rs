// pipekit/src/core/args.rs

//! Positional and keyword arguments handed to the first step of a pipeline.

use crate::core::value::Value;
use crate::error::{PipeError, PipeResult};
use std::collections::BTreeMap;

/// An argument set: an ordered positional list and a keyword map.
///
/// Built fluently:
///
/// ```
/// use pipekit::{Args, Value};
///
/// let args = Args::new().arg(1).arg(2).kwarg("k", 3);
/// assert_eq!(args.positional(), &[Value::Int(1), Value::Int(2)]);
/// assert_eq!(args.get("k"), Some(&Value::Int(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
  positional: Vec<Value>,
  keyword: BTreeMap<String, Value>,
}

impl Args {
  pub fn new() -> Self {
    Self::default()
  }

  /// A single positional argument, the shape every non-first step is called with.
  pub fn unary(value: impl Into<Value>) -> Self {
    Self {
      positional: vec![value.into()],
      keyword: BTreeMap::new(),
    }
  }

  pub fn arg(mut self, value: impl Into<Value>) -> Self {
    self.positional.push(value.into());
    self
  }

  pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
    self.keyword.insert(name.into(), value.into());
    self
  }

  pub fn positional(&self) -> &[Value] {
    &self.positional
  }

  pub fn keyword(&self) -> &BTreeMap<String, Value> {
    &self.keyword
  }

  pub fn get(&self, name: &str) -> Option<&Value> {
    self.keyword.get(name)
  }

  pub fn into_parts(self) -> (Vec<Value>, BTreeMap<String, Value>) {
    (self.positional, self.keyword)
  }

  /// Extracts the only positional argument.
  pub fn single(self) -> PipeResult<Value> {
    if self.positional.len() == 1 && self.keyword.is_empty() {
      // len checked above
      Ok(self.positional.into_iter().next().unwrap_or(Value::Unit))
    } else {
      Err(PipeError::ArityMismatch {
        expected: 1,
        found: format!("{} positional and {} keyword", self.positional.len(), self.keyword.len()),
      })
    }
  }
}

impl<V: Into<Value>> FromIterator<V> for Args {
  fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
    Self {
      positional: iter.into_iter().map(Into::into).collect(),
      keyword: BTreeMap::new(),
    }
  }
}
