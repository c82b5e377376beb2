// pipekit/src/pipeline/chain.rs

use crate::core::Callable;
use std::ops::Deref;

/// The ordered callables of a pipeline. Order is execution order.
///
/// Two chains are equal when they hold the same callables, by identity, in the same
/// order.
#[derive(Clone, Debug, Default)]
pub struct Chain(Vec<Callable>);

impl Chain {
  pub const fn new() -> Self {
    Chain(Vec::new())
  }

  pub(crate) fn push(&mut self, func: Callable) {
    self.0.push(func);
  }

  pub(crate) fn extend_from(&mut self, other: &Chain) {
    self.0.extend(other.0.iter().cloned());
  }
}

impl Deref for Chain {
  type Target = [Callable];

  fn deref(&self) -> &[Callable] {
    &self.0
  }
}

impl PartialEq for Chain {
  fn eq(&self, other: &Self) -> bool {
    self.0.len() == other.0.len() && self.0.iter().zip(other.0.iter()).all(|(a, b)| a.ptr_eq(b))
  }
}

impl Eq for Chain {}
