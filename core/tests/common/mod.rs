// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use pipekit::{Args, FunctionStage, PipeError, Value};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Test stage failed: {0}")]
  Stage(String),

  #[error("Test stage refused input: {0}")]
  Refused(i64),
}

// --- Common Stage Creators ---
pub fn inc() -> FunctionStage {
  FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? + 1)))
}

pub fn dbl() -> FunctionStage {
  FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? * 2)))
}

pub fn append(suffix: &'static str) -> FunctionStage {
  FunctionStage::new(move |x: Value| Ok(Value::Str(format!("{}{}", x.as_str()?, suffix))))
}

/// Sums all positional arguments and every keyword argument.
pub fn sum_all() -> FunctionStage {
  FunctionStage::variadic(|args: Args| {
    let mut total = 0;
    for v in args.positional() {
      total += v.as_int()?;
    }
    for v in args.keyword().values() {
      total += v.as_int()?;
    }
    Ok(Value::Int(total))
  })
}

pub fn failing(message: &'static str) -> FunctionStage {
  FunctionStage::new(move |_x: Value| {
    tracing::warn!(target: "test_stages", "failing with: '{}'", message);
    Err(PipeError::stage(TestError::Stage(message.to_string())))
  })
}

/// A pass-through stage counting its invocations.
pub fn counting(counter: Arc<AtomicUsize>) -> FunctionStage {
  FunctionStage::variadic(move |args: Args| {
    counter.fetch_add(1, Ordering::SeqCst);
    let (mut positional, _) = args.into_parts();
    Ok(positional.pop().unwrap_or(Value::Unit))
  })
}

/// Records the order in which tagged stages run.
pub fn recording(
  tag: &'static str,
  log: Arc<parking_lot::Mutex<Vec<&'static str>>>,
) -> FunctionStage {
  FunctionStage::new(move |x: Value| {
    log.lock().push(tag);
    Ok(x)
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
