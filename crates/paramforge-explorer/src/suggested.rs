//! The default hybrid exploration policy.

use paramforge_config::ExplorerConfig;
use paramforge_core::{Result, SharedGenerator};

use crate::provider::{
    AllPermutations, EvenSingleParamChange, ParamProvider, ParamStream, Partitioned,
    RandomSingleParamChange,
};

/// Infinite generators change one at a time, the first few finite ones are
/// enumerated exhaustively, and the remaining finite ones are sampled.
///
/// Built from two nested [`Partitioned`] providers:
///
/// - infinite generators go to [`EvenSingleParamChange`]
/// - the first `exhaustive_limit` finite generators (4 by default) go to
///   [`AllPermutations`]
/// - the remaining finite generators go to [`RandomSingleParamChange`]
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, from_fn, ParamGeneratorExt};
/// use paramforge_explorer::{ParamProvider, Suggested};
///
/// let provider = Suggested::new(vec![
///     from_fn(true, || 0i64..).into_param().shared(),
///     fixed(vec![true, false]).into_param().shared(),
/// ]).unwrap();
/// let tuples: Vec<_> = provider.stream().take(10).collect();
/// assert_eq!(tuples.len(), 10);
/// ```
#[derive(Debug)]
pub struct Suggested {
    inner: Partitioned,
}

impl Suggested {
    /// Builds the policy with default settings.
    pub fn new(generators: Vec<SharedGenerator>) -> Result<Self> {
        Self::with_config(generators, &ExplorerConfig::default())
    }

    /// Builds the policy using the `even`, `random`, `partitioned` and
    /// `suggested` sections of `config`. The `strategy` field is ignored.
    pub fn with_config(generators: Vec<SharedGenerator>, config: &ExplorerConfig) -> Result<Self> {
        let complete = config.even.complete_when_all_cycled;
        let stop = config.partitioned.stop_when_both_completed;
        let limit = config.suggested.exhaustive_limit;
        let random = &config.random;

        let inner = Partitioned::new(
            generators,
            |_, generator| generator.is_infinite(),
            |infinite| {
                Ok(Box::new(EvenSingleParamChange::with_completion(
                    infinite, complete,
                )))
            },
            |finite| {
                let split = Partitioned::new(
                    finite,
                    |index, _| index < limit,
                    |exhaustive| Ok(Box::new(AllPermutations::new(exhaustive)?)),
                    |sampled| Ok(Box::new(RandomSingleParamChange::with_config(sampled, random))),
                )?;
                Ok(Box::new(split.with_stop_when_both_completed(stop)))
            },
        )?
        .with_stop_when_both_completed(stop);

        Ok(Self { inner })
    }

    /// The outer infinite/finite partition.
    pub fn partitioned(&self) -> &Partitioned {
        &self.inner
    }
}

impl ParamProvider for Suggested {
    fn generators(&self) -> &[SharedGenerator] {
        self.inner.generators()
    }

    fn name(&self) -> &'static str {
        "suggested"
    }

    fn stream(&self) -> ParamStream<'_> {
        self.inner.stream()
    }
}
