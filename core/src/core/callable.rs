// pipekit/src/core/callable.rs

//! Defines `Callable`, the shared function handle stored in a pipeline's chain.

use crate::core::args::Args;
use crate::core::value::Value;
use crate::error::PipeResult;
use std::fmt;
use std::sync::Arc;

/// Type of the function behind every chain element.
///
/// Every step receives a full `Args`; unary steps are variadic steps that insist on
/// exactly one positional argument (see [`Callable::unary`]).
pub type StageFn = dyn Fn(Args) -> PipeResult<Value> + Send + Sync;

/// A reference-counted callable.
///
/// Cloning a `Callable` clones the handle, never the function. Two handles are
/// considered the same callable when they point at the same allocation, which is
/// what chain equality is built on.
#[derive(Clone)]
pub struct Callable(Arc<StageFn>);

impl Callable {
  /// Wraps a function that receives the whole argument set.
  /// Only useful in the first position of a chain; later steps are always called
  /// with a single positional argument.
  pub fn variadic(f: impl Fn(Args) -> PipeResult<Value> + Send + Sync + 'static) -> Self {
    Callable(Arc::new(f))
  }

  /// Wraps a one-argument function. Calling it with anything other than exactly one
  /// positional argument and no keywords fails with `PipeError::ArityMismatch`.
  pub fn unary(f: impl Fn(Value) -> PipeResult<Value> + Send + Sync + 'static) -> Self {
    Callable(Arc::new(move |args: Args| f(args.single()?)))
  }

  pub fn invoke(&self, args: Args) -> PipeResult<Value> {
    (self.0)(args)
  }

  pub fn invoke_unary(&self, value: Value) -> PipeResult<Value> {
    self.invoke(Args::unary(value))
  }

  /// Identity comparison: same function allocation.
  pub fn ptr_eq(&self, other: &Callable) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
  }
}

impl fmt::Debug for Callable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Callable({:p})", Arc::as_ptr(&self.0) as *const ())
  }
}
