//! ParamForge exploration engine
//!
//! This crate turns per-parameter generators into streams of argument
//! tuples:
//! - Provider strategies (even, exhaustive, random, partitioned)
//! - The default hybrid policy ([`Suggested`])
//! - A close-once guard ([`ScopedProvider`])
//! - Configuration wiring (builder module)
//!
//! # Example
//!
//! ```
//! use paramforge_core::{fixed, ParamGeneratorExt};
//! use paramforge_explorer::{ParamProvider, Suggested};
//!
//! let provider = Suggested::new(vec![
//!     fixed(vec![1, 2, 3]).into_param().shared(),
//!     fixed(vec![true, false]).into_param().shared(),
//! ]).unwrap();
//!
//! for tuple in provider.stream() {
//!     assert_eq!(tuple.len(), provider.arity());
//! }
//! provider.close().unwrap();
//! ```

pub mod builder;
pub mod provider;
pub mod scoped;
pub mod suggested;

pub use builder::ProviderBuilder;
pub use provider::{
    close_all, route_to, AllPermutations, EvenAllParamChange, EvenSingleParamChange,
    ParamProvider, ParamStream, Partitioned, RandomSingleParamChange,
};
pub use scoped::ScopedProvider;
pub use suggested::Suggested;
