// pipekit/src/core/value.rs

//! The dynamic `Value` that flows between pipeline steps.
//!
//! Adjacent steps are not type-checked against each other; a mismatch only shows up
//! when a step inspects its input, through one of the `as_*` accessors below.

use crate::core::callable::Callable;
use crate::core::sequence::LazySeq;
use crate::error::{PipeError, PipeResult};
use crate::pipeline::Pipeline;
use crate::stage::{FunctionStage, MappingStage, Stage, StageRef};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub enum Value {
  Unit,
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
  List(Vec<Value>),
  Dict(BTreeMap<String, Value>),
  /// A lazily evaluated sequence, as produced by a mapping step.
  Seq(LazySeq),
  Callable(Callable),
  Stage(StageRef),
}

impl Value {
  /// Runtime type name, used in error messages.
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Unit => "unit",
      Value::Bool(_) => "bool",
      Value::Int(_) => "int",
      Value::Float(_) => "float",
      Value::Str(_) => "str",
      Value::List(_) => "list",
      Value::Dict(_) => "dict",
      Value::Seq(_) => "seq",
      Value::Callable(_) => "callable",
      Value::Stage(stage) => stage.kind(),
    }
  }

  pub fn as_bool(&self) -> PipeResult<bool> {
    match self {
      Value::Bool(b) => Ok(*b),
      other => Err(PipeError::unexpected("bool", other)),
    }
  }

  pub fn as_int(&self) -> PipeResult<i64> {
    match self {
      Value::Int(i) => Ok(*i),
      other => Err(PipeError::unexpected("int", other)),
    }
  }

  /// Ints widen to floats.
  pub fn as_float(&self) -> PipeResult<f64> {
    match self {
      Value::Float(f) => Ok(*f),
      Value::Int(i) => Ok(*i as f64),
      other => Err(PipeError::unexpected("float", other)),
    }
  }

  pub fn as_str(&self) -> PipeResult<&str> {
    match self {
      Value::Str(s) => Ok(s),
      other => Err(PipeError::unexpected("str", other)),
    }
  }

  pub fn as_list(&self) -> PipeResult<&[Value]> {
    match self {
      Value::List(items) => Ok(items),
      other => Err(PipeError::unexpected("list", other)),
    }
  }

  /// Views this value as a sequence. Lists and strings give a restartable sequence
  /// (strings iterate their characters); a `Seq` is returned as is.
  pub fn into_seq(self) -> PipeResult<LazySeq> {
    match self {
      Value::List(items) => Ok(LazySeq::from_values(items)),
      Value::Str(s) => {
        let chars = s.chars().map(|c| Value::Str(c.to_string())).collect();
        Ok(LazySeq::from_values(chars))
      }
      Value::Seq(seq) => Ok(seq),
      other => Err(PipeError::unexpected("sequence", &other)),
    }
  }

  /// Forces a sequence into a vector. Evaluates a lazy sequence to its end.
  pub fn into_vec(self) -> PipeResult<Vec<Value>> {
    match self {
      Value::List(items) => Ok(items),
      other => other.into_seq()?.collect_vec(),
    }
  }
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Unit => write!(f, "Unit"),
      Value::Bool(b) => write!(f, "Bool({})", b),
      Value::Int(i) => write!(f, "Int({})", i),
      Value::Float(x) => write!(f, "Float({})", x),
      Value::Str(s) => write!(f, "Str({:?})", s),
      Value::List(items) => f.debug_tuple("List").field(items).finish(),
      Value::Dict(map) => f.debug_tuple("Dict").field(map).finish(),
      Value::Seq(seq) => fmt::Debug::fmt(seq, f),
      Value::Callable(c) => fmt::Debug::fmt(c, f),
      Value::Stage(stage) => f.debug_tuple("Stage").field(stage).finish(),
    }
  }
}

// Data compares structurally; functions, stages and lazy sequences by identity.
impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Value::Unit, Value::Unit) => true,
      (Value::Bool(a), Value::Bool(b)) => a == b,
      (Value::Int(a), Value::Int(b)) => a == b,
      (Value::Float(a), Value::Float(b)) => a == b,
      (Value::Str(a), Value::Str(b)) => a == b,
      (Value::List(a), Value::List(b)) => a == b,
      (Value::Dict(a), Value::Dict(b)) => a == b,
      (Value::Seq(a), Value::Seq(b)) => a.same_view(b),
      (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
      (Value::Stage(a), Value::Stage(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
      _ => false,
    }
  }
}

impl From<()> for Value {
  fn from(_: ()) -> Self {
    Value::Unit
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

impl From<i64> for Value {
  fn from(i: i64) -> Self {
    Value::Int(i)
  }
}

impl From<i32> for Value {
  fn from(i: i32) -> Self {
    Value::Int(i64::from(i))
  }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self {
    Value::Float(x)
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Value::Str(s.to_string())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::Str(s)
  }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
  fn from(items: Vec<T>) -> Self {
    Value::List(items.into_iter().map(Into::into).collect())
  }
}

impl From<BTreeMap<String, Value>> for Value {
  fn from(map: BTreeMap<String, Value>) -> Self {
    Value::Dict(map)
  }
}

impl From<LazySeq> for Value {
  fn from(seq: LazySeq) -> Self {
    Value::Seq(seq)
  }
}

impl From<Callable> for Value {
  fn from(c: Callable) -> Self {
    Value::Callable(c)
  }
}

impl From<StageRef> for Value {
  fn from(stage: StageRef) -> Self {
    Value::Stage(stage)
  }
}

impl From<Pipeline> for Value {
  fn from(pipeline: Pipeline) -> Self {
    Value::Stage(Arc::new(pipeline))
  }
}

impl From<FunctionStage> for Value {
  fn from(stage: FunctionStage) -> Self {
    Value::Stage(Arc::new(stage))
  }
}

impl From<MappingStage> for Value {
  fn from(stage: MappingStage) -> Self {
    Value::Stage(Arc::new(stage))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn type_names() {
    assert_eq!(Value::from(3).type_name(), "int");
    assert_eq!(Value::from(vec![1, 2]).type_name(), "list");
    assert_eq!(Value::from(Pipeline::new()).type_name(), "pipeline");
    assert_eq!(Value::from(MappingStage).type_name(), "mapping stage");
  }

  #[test]
  fn accessor_mismatch_names_both_types() {
    let err = Value::from("abc").as_int().unwrap_err();
    assert_eq!(err.to_string(), "Expected a value of type int, found str");
  }

  #[test]
  fn string_is_a_sequence_of_characters() {
    let chars = Value::from("ab").into_vec().unwrap();
    assert_eq!(chars, vec![Value::from("a"), Value::from("b")]);
  }

  #[test]
  fn scalar_is_not_a_sequence() {
    assert!(matches!(
      Value::from(1.5).into_seq(),
      Err(PipeError::UnexpectedValue { expected: "sequence", .. })
    ));
  }

  #[test]
  fn callables_compare_by_identity() {
    let c = Callable::unary(Ok);
    assert_eq!(Value::from(c.clone()), Value::from(c));
    assert_ne!(Value::from(Callable::unary(Ok)), Value::from(Callable::unary(Ok)));
  }

  #[test]
  fn lazy_views_compare_by_source_and_transform() {
    let double = Pipeline::from_stage(FunctionStage::new(|x: Value| Ok((x.as_int()? * 2).into())));
    let negate = Pipeline::from_stage(FunctionStage::new(|x: Value| Ok((-x.as_int()?).into())));
    let base = LazySeq::from_values(vec![Value::Int(1), Value::Int(2)]);

    let doubled = Value::from(base.clone().map(double.clone()));
    let negated = Value::from(base.clone().map(negate));
    assert_ne!(doubled, negated);
    assert_ne!(doubled, Value::from(base.clone()));
    assert_eq!(Value::from(base.clone()), Value::from(base.clone()));

    // Same source, same callables: equal even though built separately.
    assert_eq!(doubled, Value::from(base.map(double)));
  }
}
