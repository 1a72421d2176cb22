//! # word-memory
//!
//! A timed memory-pair game engine for vocabulary practice.
//!
//! Cards are dealt face down in pairs: a word and its image (or definition).
//! The player turns up two at a time; pairs score, mismatches flip back, and
//! the game ends when every pair is found or the countdown runs out.
//!
//! ## Design Principles
//!
//! 1. **Commands In, Events Out**: The session never blocks. Hosts send
//!    `flip`/`restart`, move time with `advance`, and read back a
//!    `SessionView` plus a queue of `SessionEvent`s.
//!
//! 2. **Deterministic Time**: All delays go through a `Scheduler`. The
//!    default `VirtualClock` makes every timing rule testable without
//!    sleeping.
//!
//! 3. **Configuration Over Convention**: Durations, delays, point values
//!    and deck layout live in `GameConfig`; concept data in `ConceptList`.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, seeded RNG
//! - `cards`: Concepts, card instances, deck building and shuffling
//! - `clock`: Scheduler trait and the virtual clock
//! - `rules`: Match evaluation and scoring
//! - `session`: The game state machine and its builder
//! - `store`: High-score persistence
//! - `speech`: Voice-repeat word checking
//! - `wordmatch`: Word-to-picture matching board
//! - `spelling`: Scrambled-letter spelling levels

pub mod core;
pub mod cards;
pub mod clock;
pub mod rules;
pub mod session;
pub mod store;
pub mod speech;
pub mod wordmatch;
pub mod spelling;

// Re-export commonly used types
pub use crate::core::{ConfigError, DeckLayout, GameConfig, GameRng, ScoringRules};

pub use crate::cards::{Card, CardId, CardKind, Concept, ConceptList, Deck};

pub use crate::clock::{Scheduler, TimerHandle, VirtualClock};

pub use crate::rules::{Award, MatchEvaluator, Verdict};

pub use crate::session::{
    GameOverReason, Notification, Session, SessionBuilder, SessionEvent, SessionView, Status,
    TimerEvent,
};

pub use crate::store::{
    HighScoreStore, JsonFileStore, KeyValueStore, KeyedHighScore, MemoryStore, StoreError,
};

pub use crate::speech::{compare_spoken, Lexicon, SpeechError, VoiceRound, VoiceStatus};

pub use crate::wordmatch::{MatchReport, WordMatchGame};

pub use crate::spelling::{SpellingGame, SpellingStatus};
