//! Voice-repeat practice.
//!
//! The player hears a word, says it back, and the round checks the
//! recognizer's transcript against the target with a forgiving comparison:
//! containment either way or a Levenshtein similarity above a threshold.
//! Speech capture itself belongs to the host.

mod lexicon;
mod round;
mod similarity;

pub use lexicon::{Lexicon, SpokenWord, LANGUAGES};
pub use round::{SpeechError, VoiceRound, VoiceStatus, LISTEN_TIMEOUT_MS};
pub use similarity::{compare_spoken, levenshtein, similarity, SpokenMatch, DEFAULT_THRESHOLD};
