// src/lib.rs

//! pipekit: a small algebra for building and applying function pipelines.
//!
//! A pipeline is an ordered chain of steps. Pipelines are built by composing stages
//! (single functions, other pipelines, or the mapping stage) and applied either
//! directly or by piping a bound application into them:
//!  - `a >> b` runs `a` then `b`; `b << a` builds the same chain.
//!  - Composition never modifies its operands.
//!  - `pipeline.call(args)` folds the chain over `args`.
//!  - `MAP.call(seq) | &pipeline` applies a pipeline to every element of `seq`.
//!  - `ApplyRequest::new(args) | &pipeline` applies a pipeline to captured arguments.
//!
//! ```
//! use pipekit::{Args, FunctionStage, Value, MAP};
//!
//! let inc = FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? + 1)));
//! let dbl = FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()? * 2)));
//!
//! let pipeline = &inc >> &dbl;
//! assert_eq!(pipeline.call(Args::unary(5)).unwrap(), Value::Int(12));
//!
//! let reversed = &inc << &dbl;
//! assert_eq!(reversed.call(Args::unary(5)).unwrap(), Value::Int(11));
//!
//! let mapped = MAP.call(vec![1, 2, 3]) | &pipeline;
//! assert_eq!(mapped.unwrap(), Value::from(vec![4, 6, 8]));
//! ```

pub mod applicative;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod stage;

// --- Re-exports for the Public API ---

// The value model flowing through a chain
pub use crate::core::{Args, Callable, LazySeq, Value};

// Stages and their normalization
pub use crate::stage::{parse, FunctionStage, IntoStage, MappingStage, Stage, StageRef, MAP};

// The main Pipeline struct and the shared empty entry point
pub use crate::pipeline::{Chain, Pipeline, PIPE};

pub use crate::applicative::{Applicative, ApplyRequest, MapApplication};

pub use crate::error::{PipeError, PipeResult};
