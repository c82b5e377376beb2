// pipekit/examples/error_handling.rs

use pipekit::{Args, FunctionStage, PipeError, Pipeline, Value};
use tracing::{error, info};

// A custom application error, carried through a stage failure
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("Negative input not allowed: {0}")]
  Negative(i64),
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  let sqrt = FunctionStage::new(|x: Value| {
    let n = x.as_int()?;
    if n < 0 {
      return Err(PipeError::stage(ExampleAppError::Negative(n)));
    }
    Ok(Value::Float((n as f64).sqrt()))
  });
  let pipeline = Pipeline::named("roots") >> sqrt;

  // Scenario 1: a stage reports a custom error
  match pipeline.call(Args::unary(-4)) {
    Ok(v) => info!("Unexpected success: {:?}", v),
    Err(PipeError::Stage { source }) => match source.downcast_ref::<ExampleAppError>() {
      Some(app_err) => error!("Stage failed with application error: {}", app_err),
      None => error!("Stage failed: {}", source),
    },
    Err(other) => error!("Pipeline error: {}", other),
  }

  // Scenario 2: applying an empty pipeline
  if let Err(e) = Pipeline::named("nothing").call(Args::unary(1)) {
    error!("Framework error: {}", e);
  }

  // Scenario 3: composing with something that isn't a stage
  if let Err(e) = pipeline.compose_right_value(Value::Int(3)) {
    error!("Composition error: {}", e);
  }
}
