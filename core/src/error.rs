// pipekit/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipeError {
  /// A value handed to a composition entry point is neither a stage nor callable.
  #[error("Couldn't pass {type_name} to pipe because it's neither a stage nor callable")]
  TypeMismatch { type_name: String },

  #[error("Couldn't apply empty pipeline{}", label_suffix(.label))]
  EmptyPipeline { label: Option<String> },

  #[error("Unary stage expected {expected} positional argument(s) and no keywords, got {found}")]
  ArityMismatch { expected: usize, found: String },

  #[error("Expected a value of type {expected}, found {found}")]
  UnexpectedValue { expected: &'static str, found: String },

  #[error("Error in user-provided stage. Source: {source}")]
  Stage {
    #[source]
    source: AnyhowError,
  },
}

// User stages written against anyhow can use `?` and land here.
impl From<AnyhowError> for PipeError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a PipeError that was boxed into anyhow on its way out of user code,
    // so it reaches the caller as the variant it started as.
    match err.downcast::<PipeError>() {
      Ok(pipe_err) => pipe_err,
      Err(err) => PipeError::Stage { source: err },
    }
  }
}

impl PipeError {
  /// Wraps any user error as a stage failure.
  pub fn stage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    PipeError::Stage {
      source: AnyhowError::new(err),
    }
  }

  pub(crate) fn unexpected(expected: &'static str, found: &crate::Value) -> Self {
    PipeError::UnexpectedValue {
      expected,
      found: found.type_name().to_string(),
    }
  }
}

fn label_suffix(label: &Option<String>) -> String {
  label.as_deref().map(|l| format!(" '{}'", l)).unwrap_or_default()
}

pub type PipeResult<T, E = PipeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anyhow_wrapped_pipe_error_is_unwrapped() {
    let boxed: AnyhowError = PipeError::EmptyPipeline { label: None }.into();
    match PipeError::from(boxed) {
      PipeError::EmptyPipeline { label } => assert!(label.is_none()),
      other => panic!("Expected EmptyPipeline, got {:?}", other),
    }
  }

  #[test]
  fn foreign_anyhow_error_becomes_stage_error() {
    let err = PipeError::from(anyhow::anyhow!("disk on fire"));
    match err {
      PipeError::Stage { source } => assert_eq!(source.to_string(), "disk on fire"),
      other => panic!("Expected Stage, got {:?}", other),
    }
  }

  #[test]
  fn empty_pipeline_message_names_label() {
    let err = PipeError::EmptyPipeline {
      label: Some("ingest".to_string()),
    };
    assert_eq!(err.to_string(), "Couldn't apply empty pipeline 'ingest'");
    let err = PipeError::EmptyPipeline { label: None };
    assert_eq!(err.to_string(), "Couldn't apply empty pipeline");
  }
}
