//! Core engine types: configuration, errors, RNG.
//!
//! Hosts tune the game through `GameConfig` rather than by changing the
//! session code.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckLayout, GameConfig, ScoringRules};
pub use error::ConfigError;
pub use rng::GameRng;
