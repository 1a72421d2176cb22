//! Session construction.

use super::event::TimerEvent;
use super::state::Session;
use crate::cards::{ConceptList, Deck};
use crate::clock::{Scheduler, VirtualClock};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::store::HighScoreStore;

/// Builder for creating a [`Session`].
///
/// Defaults: the classic configuration, the built-in concepts, an
/// entropy-seeded RNG and an in-memory high score starting at zero.
///
/// ## Example
///
/// ```
/// use word_memory::session::{SessionBuilder, Status};
///
/// let mut session = SessionBuilder::new().seed(42).build().unwrap();
/// assert_eq!(session.status(), Status::Idle);
///
/// session.restart();
/// assert_eq!(session.status(), Status::Playing);
/// assert_eq!(session.cards().len(), 10);
/// assert_eq!(session.time_remaining(), 90);
/// ```
pub struct SessionBuilder<H = u32> {
    config: GameConfig,
    concepts: ConceptList,
    seed: Option<u64>,
    store: H,
}

impl Default for SessionBuilder<u32> {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            concepts: ConceptList::builtin(),
            seed: None,
            store: 0,
        }
    }
}

impl SessionBuilder<u32> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: HighScoreStore> SessionBuilder<H> {
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn concepts(mut self, concepts: ConceptList) -> Self {
        self.concepts = concepts;
        self
    }

    /// Fix the RNG seed so every deal is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Persist the high score through `store`.
    pub fn store<S: HighScoreStore>(self, store: S) -> SessionBuilder<S> {
        SessionBuilder {
            config: self.config,
            concepts: self.concepts,
            seed: self.seed,
            store,
        }
    }

    /// Build an idle session on a virtual clock.
    pub fn build(self) -> Result<Session<H, VirtualClock<TimerEvent>>> {
        self.build_with_clock(VirtualClock::new())
    }

    /// Build an idle session on a caller-supplied scheduler.
    ///
    /// Fails if the configuration is invalid or the concepts cannot be laid
    /// out as the configuration asks; the engine never starts with a deck
    /// that lacks perfect pairing.
    pub fn build_with_clock<C: Scheduler<TimerEvent>>(self, clock: C) -> Result<Session<H, C>> {
        self.config.validate()?;
        let deck = Deck::new(self.concepts, self.config.layout)?;
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Session::new(self.config, deck, rng, clock, self.store))
    }
}
