//! ParamForge - Parameter Space Exploration in Rust
//!
//! Give it one generator per parameter of the function under test and pick
//! an exploration policy; it hands back a lazy stream of argument tuples and
//! routes each invocation's outcome back to the generators.
//!
//! # Example
//!
//! ```rust
//! use paramforge::prelude::*;
//!
//! let provider = Suggested::new(vec![
//!     interesting::generator(ParamKind::Byte).unwrap().shared(),
//!     fixed(vec![true, false]).into_param().shared(),
//! ]).unwrap();
//!
//! let target = FunctionRef::new("checked_div");
//! for tuple in provider.stream().take(20) {
//!     // invoke the function under test here
//!     let record = ExecutionRecord::succeeded(target.clone(), tuple, None);
//!     provider.route_result(&record);
//! }
//! provider.close().unwrap();
//! ```

// Values, records and generators
pub use paramforge_core::generator::interesting;
pub use paramforge_core::{
    fixed, from_fn, suggested, ErrorInfo, ExecutionRecord, FixedGenerator, FnGenerator,
    FunctionRef, IntoParam, Mapped, ParamForgeError, ParamGenerator, ParamGeneratorExt, ParamKind,
    ParamTuple, ParamType, ParamValue, Result, SharedGenerator, ValueIter,
};

// Configuration
pub use paramforge_config::{
    ConfigError, EvenConfig, ExplorerConfig, PartitionedConfig, RandomConfig, StrategyKind,
    SuggestedConfig,
};

// Providers
pub use paramforge_explorer::{
    AllPermutations, EvenAllParamChange, EvenSingleParamChange, ParamProvider, ParamStream,
    Partitioned, ProviderBuilder, RandomSingleParamChange, ScopedProvider, Suggested,
};

/// Console output, enabled with the `console` feature.
#[cfg(feature = "console")]
pub use paramforge_console as console;

pub mod prelude {
    pub use super::interesting;
    pub use super::{
        fixed, from_fn, suggested, ExecutionRecord, FunctionRef, ParamGenerator,
        ParamGeneratorExt, ParamKind, ParamType, ParamValue, SharedGenerator,
    };
    pub use super::{ExplorerConfig, StrategyKind};
    pub use super::{
        AllPermutations, EvenAllParamChange, EvenSingleParamChange, ParamProvider, Partitioned,
        ProviderBuilder, RandomSingleParamChange, ScopedProvider, Suggested,
    };
}
