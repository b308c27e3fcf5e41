//! Tuple composition strategies.
//!
//! A [`ParamProvider`] owns one generator per parameter of the function
//! under test and turns them into a lazy stream of full argument tuples.
//! Position `i` of every tuple is always drawn from generator `i`.
//!
//! - [`EvenAllParamChange`] - every generator advances on every tuple
//! - [`EvenSingleParamChange`] - one generator advances per tuple, round-robin
//! - [`AllPermutations`] - cartesian product of finite generators
//! - [`RandomSingleParamChange`] - random single changes with duplicate avoidance
//! - [`Partitioned`] - splits generators between two sub-providers

mod cursor;
mod even_all;
mod even_single;
mod partitioned;
mod permutations;
mod random;
mod session;

use std::fmt::Debug;

use paramforge_core::{ExecutionRecord, ParamTuple, Result, SharedGenerator};
use tracing::warn;

pub use even_all::EvenAllParamChange;
pub use even_single::EvenSingleParamChange;
pub use partitioned::Partitioned;
pub use permutations::AllPermutations;
pub use random::RandomSingleParamChange;

/// A lazy stream of argument tuples.
pub type ParamStream<'a> = Box<dyn Iterator<Item = ParamTuple> + Send + 'a>;

/// Composes per-parameter generators into argument tuples.
///
/// Providers never replace or reorder their generators; they only start and
/// consume passes over them. Every call to [`stream`](Self::stream) starts an
/// independent session.
///
/// # Thread safety
///
/// A stream is pulled by one thread at a time. [`route_result`](Self::route_result)
/// may be called concurrently from worker threads while a stream is live.
pub trait ParamProvider: Send + Sync + Debug {
    /// The generators, in parameter order.
    fn generators(&self) -> &[SharedGenerator];

    /// Short strategy name used in log events.
    fn name(&self) -> &'static str;

    /// Number of parameters per tuple.
    fn arity(&self) -> usize {
        self.generators().len()
    }

    /// Starts a fresh session.
    fn stream(&self) -> ParamStream<'_>;

    /// Hands an invocation outcome to the generators that built its tuple.
    fn route_result(&self, record: &ExecutionRecord) {
        route_to(self.generators(), record);
    }

    /// Closes every generator, returning the first failure.
    fn close(&self) -> Result<()> {
        close_all(self.generators())
    }
}

impl<P: ParamProvider + ?Sized> ParamProvider for Box<P> {
    fn generators(&self) -> &[SharedGenerator] {
        (**self).generators()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn stream(&self) -> ParamStream<'_> {
        (**self).stream()
    }

    fn route_result(&self, record: &ExecutionRecord) {
        (**self).route_result(record)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }
}

/// Calls `on_complete(record, i, params[i])` on each generator `i`.
///
/// Records whose tuple length differs from the generator count are routed
/// over the common prefix and reported.
pub fn route_to(generators: &[SharedGenerator], record: &ExecutionRecord) {
    let params = record.params();
    if params.len() != generators.len() {
        warn!(
            event = "malformed_record",
            function = %record.target(),
            expected = generators.len() as u64,
            actual = params.len() as u64,
            "record arity does not match provider arity"
        );
    }
    for (index, (generator, value)) in generators.iter().zip(params).enumerate() {
        generator.on_complete(record, index, value);
    }
}

/// Closes every generator even if some fail; the first failure wins.
pub fn close_all(generators: &[SharedGenerator]) -> Result<()> {
    let mut first_error = None;
    for generator in generators {
        if let Err(err) = generator.close() {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}
