//! Configuration system for ParamForge.
//!
//! Load exploration configuration from TOML or YAML files to pick a
//! provider strategy and tune its termination and sampling knobs without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use paramforge_config::{ExplorerConfig, StrategyKind};
//!
//! let config = ExplorerConfig::from_toml_str(r#"
//!     strategy = "random_single"
//!
//!     [random]
//!     seed = 7
//!     dedup_capacity = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, StrategyKind::RandomSingle);
//! assert_eq!(config.random.seed, Some(7));
//! assert_eq!(config.random.max_consecutive_duplicates, 200);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use paramforge_config::ExplorerConfig;
//!
//! let config = ExplorerConfig::load("explorer.toml").unwrap_or_default();
//! // Proceeds with the suggested hybrid strategy
//! ```

use std::path::Path;

use paramforge_core::ParamForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of position vectors remembered before the window resets.
pub const DEFAULT_DEDUP_CAPACITY: usize = 20_000;

/// Default number of consecutive duplicate draws before a random stream ends.
pub const DEFAULT_MAX_CONSECUTIVE_DUPLICATES: usize = 200;

/// Default number of finite generators explored exhaustively.
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 4;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ParamForgeError {
    fn from(err: ConfigError) -> Self {
        ParamForgeError::Config(err.to_string())
    }
}

/// Main exploration configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExplorerConfig {
    /// Which provider composes the generators.
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Settings for the even (cycling) strategies.
    #[serde(default)]
    pub even: EvenConfig,

    /// Settings for random single-change sampling.
    #[serde(default)]
    pub random: RandomConfig,

    /// Settings for the partitioning combinator.
    #[serde(default)]
    pub partitioned: PartitionedConfig,

    /// Settings for the default hybrid strategy.
    #[serde(default)]
    pub suggested: SuggestedConfig,
}

impl ExplorerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random.seed = Some(seed);
        self
    }

    /// Checks values that parse but cannot drive a provider.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random.max_consecutive_duplicates == 0 {
            return Err(ConfigError::Invalid(
                "random.max_consecutive_duplicates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Provider strategy selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Infinite generators round-robin, a few finite ones exhaustively,
    /// the rest by random sampling.
    #[default]
    Suggested,

    /// Every generator advances on every tuple.
    EvenAll,

    /// One generator advances per tuple, round-robin.
    EvenSingle,

    /// Full cartesian product of finite generators.
    AllPermutations,

    /// One random generator advances per tuple, skipping repeats.
    RandomSingle,
}

/// Settings for the even strategies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EvenConfig {
    /// End the stream once every generator has wrapped at least once.
    #[serde(default = "default_true")]
    pub complete_when_all_cycled: bool,
}

impl Default for EvenConfig {
    fn default() -> Self {
        Self {
            complete_when_all_cycled: true,
        }
    }
}

/// Settings for random single-change sampling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RandomConfig {
    /// Seed for reproducible streams. Seeded from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Seen position vectors kept before the window is cleared.
    #[serde(default = "default_dedup_capacity")]
    pub dedup_capacity: usize,

    /// Consecutive duplicate draws tolerated before the stream ends.
    #[serde(default = "default_max_consecutive_duplicates")]
    pub max_consecutive_duplicates: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            seed: None,
            dedup_capacity: DEFAULT_DEDUP_CAPACITY,
            max_consecutive_duplicates: DEFAULT_MAX_CONSECUTIVE_DUPLICATES,
        }
    }
}

impl RandomConfig {
    /// Returns a copy with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Settings for the partitioning combinator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PartitionedConfig {
    /// End the stream once both sides have completed at least once.
    #[serde(default = "default_true")]
    pub stop_when_both_completed: bool,
}

impl Default for PartitionedConfig {
    fn default() -> Self {
        Self {
            stop_when_both_completed: true,
        }
    }
}

/// Settings for the default hybrid strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SuggestedConfig {
    /// How many finite generators, in order, get exhaustive coverage.
    #[serde(default = "default_exhaustive_limit")]
    pub exhaustive_limit: usize,
}

impl Default for SuggestedConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: DEFAULT_EXHAUSTIVE_LIMIT,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_dedup_capacity() -> usize {
    DEFAULT_DEDUP_CAPACITY
}

fn default_max_consecutive_duplicates() -> usize {
    DEFAULT_MAX_CONSECUTIVE_DUPLICATES
}

fn default_exhaustive_limit() -> usize {
    DEFAULT_EXHAUSTIVE_LIMIT
}
