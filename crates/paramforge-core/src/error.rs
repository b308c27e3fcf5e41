//! Error types for ParamForge

use thiserror::Error;

/// Main error type for ParamForge operations
#[derive(Debug, Error)]
pub enum ParamForgeError {
    /// The requested type is a known gap with no curated generator yet
    #[error("Unsupported parameter type: {type_name}")]
    Unsupported { type_name: String },

    /// No suggested generator exists for the requested type
    #[error("No suggested generator for {type_name}")]
    NoSuggestion { type_name: String },

    /// An exhaustive strategy was handed a generator that never ends
    #[error("Cannot have infinite generator for all permutations (generator {index})")]
    InfiniteGenerator { index: usize },

    /// Invalid exploration configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generator failed to release a held resource
    #[error("Resource error: {0}")]
    Resource(String),
}

/// Result type alias for ParamForge operations
pub type Result<T> = std::result::Result<T, ParamForgeError>;
