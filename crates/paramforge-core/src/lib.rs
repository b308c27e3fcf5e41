//! ParamForge Core - Core types and traits for parameter-space exploration
//!
//! This crate provides the fundamental abstractions for ParamForge:
//! - Parameter values and parameter type descriptors
//! - Execution records handed back by the external invocation layer
//! - The [`ParamGenerator`] trait with its fixed, closure-backed and
//!   mapping implementations
//! - Curated "interesting value" sets for numeric widths

pub mod error;
pub mod generator;
pub mod record;
pub mod value;

pub use error::{ParamForgeError, Result};
pub use generator::{
    fixed, from_fn, interesting, suggested, FixedGenerator, FnGenerator, IntoParam, Mapped,
    ParamGenerator, ParamGeneratorExt, SharedGenerator, ValueIter,
};
pub use record::{ErrorInfo, ExecutionRecord, FunctionRef};
pub use value::{ParamKind, ParamTuple, ParamType, ParamValue};
