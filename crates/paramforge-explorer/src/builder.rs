//! Wiring between configuration and providers.

use paramforge_config::{ExplorerConfig, StrategyKind};
use paramforge_core::{Result, SharedGenerator};

use crate::provider::{
    AllPermutations, EvenAllParamChange, EvenSingleParamChange, ParamProvider,
    RandomSingleParamChange,
};
use crate::scoped::ScopedProvider;
use crate::suggested::Suggested;

/// Builder for constructing providers from configuration.
pub struct ProviderBuilder;

impl ProviderBuilder {
    /// Builds the provider selected by `config.strategy`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, or if the strategy rejects the
    /// generators (exhaustive enumeration over an infinite generator).
    pub fn build(
        config: &ExplorerConfig,
        generators: Vec<SharedGenerator>,
    ) -> Result<Box<dyn ParamProvider>> {
        config.validate()?;
        let provider: Box<dyn ParamProvider> = match config.strategy {
            StrategyKind::Suggested => Box::new(Suggested::with_config(generators, config)?),
            StrategyKind::EvenAll => Box::new(EvenAllParamChange::with_completion(
                generators,
                config.even.complete_when_all_cycled,
            )),
            StrategyKind::EvenSingle => Box::new(EvenSingleParamChange::with_completion(
                generators,
                config.even.complete_when_all_cycled,
            )),
            StrategyKind::AllPermutations => Box::new(AllPermutations::new(generators)?),
            StrategyKind::RandomSingle => Box::new(RandomSingleParamChange::with_config(
                generators,
                &config.random,
            )),
        };
        Ok(provider)
    }

    /// Like [`build`](Self::build), wrapped so the generators are closed
    /// when the provider goes out of scope.
    pub fn scoped(
        config: &ExplorerConfig,
        generators: Vec<SharedGenerator>,
    ) -> Result<ScopedProvider<Box<dyn ParamProvider>>> {
        Self::build(config, generators).map(ScopedProvider::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use paramforge_core::{ParamForgeError, ParamValue};
    use paramforge_test::{counter, ints, strs, ClosingProbe};

    fn gens() -> Vec<SharedGenerator> {
        vec![strs(&["a", "b"]), ints(&[1, 2, 3])]
    }

    #[test]
    fn builds_each_strategy() {
        let cases = [
            (StrategyKind::Suggested, "suggested"),
            (StrategyKind::EvenAll, "even_all"),
            (StrategyKind::EvenSingle, "even_single"),
            (StrategyKind::AllPermutations, "all_permutations"),
            (StrategyKind::RandomSingle, "random_single"),
        ];
        for (strategy, name) in cases {
            let config = ExplorerConfig::default()
                .with_strategy(strategy)
                .with_random_seed(1);
            let provider = ProviderBuilder::build(&config, gens()).unwrap();
            assert_eq!(provider.name(), name);
            assert_eq!(provider.arity(), 2);
        }
    }

    #[test]
    fn configured_strategies_shape_the_stream() {
        let config = ExplorerConfig::from_toml_str(r#"strategy = "all_permutations""#).unwrap();
        let provider = ProviderBuilder::build(&config, gens()).unwrap();
        assert_eq!(provider.stream().count(), 6);

        let config = ExplorerConfig::from_toml_str(
            r#"
            strategy = "even_single"

            [even]
            complete_when_all_cycled = false
        "#,
        )
        .unwrap();
        let provider = ProviderBuilder::build(&config, gens()).unwrap();
        assert_eq!(provider.stream().take(40).count(), 40);
    }

    #[test]
    fn rejects_infinite_generators_for_permutations() {
        let config = ExplorerConfig::default().with_strategy(StrategyKind::AllPermutations);
        let err = ProviderBuilder::build(&config, vec![counter()]).unwrap_err();
        assert!(matches!(err, ParamForgeError::InfiniteGenerator { index: 0 }));
    }

    #[test]
    fn rejects_invalid_configuration() {
        let mut config = ExplorerConfig::default();
        config.random.max_consecutive_duplicates = 0;
        let err = ProviderBuilder::build(&config, gens()).unwrap_err();
        assert!(matches!(err, ParamForgeError::Config(_)));
    }

    #[test]
    fn scoped_build_closes_on_drop() {
        let probe = Arc::new(ClosingProbe::new([ParamValue::Int(1), ParamValue::Int(2)]));
        let provider = ProviderBuilder::scoped(
            &ExplorerConfig::default(),
            vec![probe.clone(), strs(&["a", "b"])],
        )
        .unwrap();
        assert!(!provider.is_closed());
        assert_eq!(provider.inner().name(), "suggested");
        assert_eq!(provider.stream().count(), 4);
        assert_eq!(probe.close_count(), 0);

        drop(provider);

        assert_eq!(probe.close_count(), 1);
    }
}
