// pipekit/examples/basic_pipeline.rs

use pipekit::{Args, FunctionStage, PipeError, Value, PIPE};
use tracing::info;

fn main() -> Result<(), PipeError> {
  // Initialize tracing (optional, for demonstration). Try RUST_LOG=pipekit=trace.
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  info!("--- Basic Pipeline Example ---");

  // 1. Define stages
  let inc = FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? + 1)));
  let dbl = FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? * 2)));

  // 2. Compose in both directions
  let inc_then_dbl = &inc >> &dbl;
  let dbl_then_inc = &inc << &dbl;

  // 3. Apply
  info!("inc >> dbl on 5 = {:?}", inc_then_dbl.call(Args::unary(5))?);
  info!("inc << dbl on 5 = {:?}", dbl_then_inc.call(Args::unary(5))?);

  // 4. Start from the shared empty pipeline and keep extending
  let label = FunctionStage::new(|x: Value| Ok(Value::Str(format!("result: {}", x.as_int()?))));
  let describe = &PIPE >> &inc_then_dbl >> label;
  info!("{:?}", describe.apply_one(20)?);

  // The ancestors are untouched by composition.
  info!(
    "inc_then_dbl still has {} steps, describe has {}",
    inc_then_dbl.len(),
    describe.len()
  );

  Ok(())
}
