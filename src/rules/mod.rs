//! Match rules.
//!
//! `MatchEvaluator` decides whether two face-up cards form a pair and what
//! the pair is worth. It is pure: the session owns every state change that
//! follows from a `Verdict`.

pub mod evaluator;

pub use evaluator::{Award, MatchEvaluator, Verdict};
