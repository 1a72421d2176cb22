//! Construction-time configuration errors.
//!
//! These are raised before a session ever starts. Runtime input problems
//! (double clicks, flips after game over) are not errors and never surface
//! here.

use thiserror::Error;

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that prevent an engine from being built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("concept list is empty")]
    EmptyConceptList,

    #[error("concept at index {index} has a blank key")]
    BlankConceptKey { index: usize },

    #[error("duplicate concept key {key:?}")]
    DuplicateConceptKey { key: String },

    #[error("concept {key:?} has no definition but the deck layout requires one")]
    MissingDefinition { key: String },

    #[error("invalid game config: {0}")]
    InvalidConfig(&'static str),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
