// pipekit/examples/mapped_application.rs

use pipekit::{ApplyRequest, Args, FunctionStage, PipeError, Value, MAP, PIPE};
use tracing::info;

fn main() -> Result<(), PipeError> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  info!("--- Mapped Application Example ---");

  let shout = &PIPE
    >> FunctionStage::new(|x: Value| Ok(Value::Str(x.as_str()?.to_uppercase())))
    >> FunctionStage::new(|x: Value| Ok(Value::Str(format!("{}!", x.as_str()?))));

  // Scenario 1: eager, element-wise application
  let words = MAP.call(vec!["hello", "pipeline", "world"]) | &shout;
  info!("Eager: {:?}", words?);

  // Scenario 2: a mapping step inside a chain; nothing runs until the view is forced
  let lazily = &shout >> MAP;
  let view = lazily.call(Args::unary(vec!["lazy", "view"]))?;
  info!("Lazy view before forcing: {:?}", view);
  info!("Forced: {:?}", view.into_vec()?);

  // Scenario 3: bound arguments
  let join = FunctionStage::variadic(|args: Args| {
    let sep = match args.get("sep") {
      Some(v) => v.as_str()?.to_string(),
      None => " ".to_string(),
    };
    let parts: Result<Vec<&str>, PipeError> = args.positional().iter().map(Value::as_str).collect();
    Ok(Value::Str(parts?.join(sep.as_str())))
  });
  let request = ApplyRequest::new(Args::new().arg("a").arg("b").kwarg("sep", "-"));
  let joined = request | (&PIPE >> join >> &shout);
  info!("Bound arguments: {:?}", joined?);

  Ok(())
}
