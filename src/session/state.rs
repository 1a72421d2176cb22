//! The memory-pair session.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::event::{GameOverReason, Notification, SessionEvent, TimerEvent};
use super::view::{SessionView, Status};
use crate::cards::{Card, CardId, Deck};
use crate::clock::{Scheduler, TimerHandle, VirtualClock};
use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::rules::{MatchEvaluator, Verdict};
use crate::store::HighScoreStore;

/// One memory-pair game and everything it owns: deck, countdown, score,
/// combo streak, flip buffer, timers and the high-score collaborator.
///
/// The session is a command-in, events-out state machine. Hosts call
/// [`flip`](Session::flip) and [`restart`](Session::restart), move time
/// with [`advance`](Session::advance), and read [`view`](Session::view) and
/// [`drain_events`](Session::drain_events). Nothing happens between calls.
///
/// ## Invariants
///
/// - At most two cards are in the flip buffer, and none of them is matched.
/// - While a pair is being evaluated no flip is accepted.
/// - `score` never decreases until the next restart.
/// - Once `Over`, only `restart` changes the session again.
pub struct Session<H = u32, C = VirtualClock<TimerEvent>> {
    config: GameConfig,
    deck: Deck,
    evaluator: MatchEvaluator,
    rng: GameRng,
    clock: C,
    store: H,
    high_score: u32,

    status: Status,
    cards: Vec<Card>,
    /// Card id -> position in `cards`.
    index: FxHashMap<CardId, usize>,
    score: u32,
    combo: u32,
    time_remaining: u32,
    flipped: SmallVec<[CardId; 2]>,
    evaluating: bool,
    notification: Option<Notification>,

    countdown: Option<TimerHandle>,
    pending_evaluation: Option<TimerHandle>,
    pending_unflip: Option<TimerHandle>,
    notification_timer: Option<TimerHandle>,

    events: Vec<SessionEvent>,
}

impl<H: HighScoreStore, C: Scheduler<TimerEvent>> Session<H, C> {
    /// Assemble an idle session. Reads the stored high score once.
    ///
    /// Use [`SessionBuilder`](super::SessionBuilder) rather than calling this
    /// directly; the builder validates configuration and concept data.
    pub(crate) fn new(config: GameConfig, deck: Deck, rng: GameRng, clock: C, store: H) -> Self {
        let high_score = store.read();
        Self {
            evaluator: MatchEvaluator::new(config.scoring),
            time_remaining: config.duration_secs,
            config,
            deck,
            rng,
            clock,
            store,
            high_score,
            status: Status::Idle,
            cards: Vec::new(),
            index: FxHashMap::default(),
            score: 0,
            combo: 0,
            flipped: SmallVec::new(),
            evaluating: false,
            notification: None,
            countdown: None,
            pending_evaluation: None,
            pending_unflip: None,
            notification_timer: None,
            events: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == Status::Over
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Best score known to this session, including the current game once
    /// it has finished.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Whether a full flip buffer is waiting to be judged or unflipped.
    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.evaluating
    }

    /// Cards in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Face-up, unresolved cards in flip order.
    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    /// Check if every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }

    /// Current time on the session clock, in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    /// The session clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The high-score collaborator.
    #[must_use]
    pub fn store(&self) -> &H {
        &self.store
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            status: self.status,
            cards: &self.cards,
            score: self.score,
            combo: self.combo,
            time_remaining: self.time_remaining,
            high_score: self.high_score,
            notification: self.notification,
            evaluating: self.evaluating,
            game_over: self.is_game_over(),
        }
    }

    /// Take every event reported since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Start a new game, from any state.
    ///
    /// Cancels every pending timer (so no stale countdown or unflip touches
    /// the new deck), deals a freshly shuffled deck, resets score, combo and
    /// countdown, then starts the countdown.
    pub fn restart(&mut self) {
        self.clock.cancel_all();
        self.countdown = None;
        self.pending_evaluation = None;
        self.pending_unflip = None;
        self.notification_timer = None;

        let mut deal_rng = self.rng.fork();
        self.cards = self.deck.deal(&mut deal_rng);
        self.index = self.cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();

        self.score = 0;
        self.combo = 0;
        self.time_remaining = self.config.duration_secs;
        self.flipped.clear();
        self.evaluating = false;
        self.notification = None;
        self.status = Status::Playing;

        self.countdown = Some(
            self.clock
                .schedule_repeating(self.config.tick_interval_ms, TimerEvent::Tick),
        );

        tracing::info!(
            pairs = self.deck.pair_count(),
            duration_secs = self.config.duration_secs,
            seed = deal_rng.seed(),
            "memory session started"
        );
        self.events.push(SessionEvent::Started {
            pairs: self.deck.pair_count(),
            duration_secs: self.config.duration_secs,
        });
    }

    /// Turn a card face up.
    ///
    /// Returns whether the flip was accepted. Flips are ignored while a pair
    /// is being evaluated, outside a running game, for unknown ids and for
    /// cards already face up or matched. When the flip fills the buffer the
    /// pair is judged after the reveal delay.
    pub fn flip(&mut self, id: CardId) -> bool {
        if self.status != Status::Playing || self.evaluating {
            tracing::trace!(
                card = %id,
                status = ?self.status,
                evaluating = self.evaluating,
                "flip ignored"
            );
            return false;
        }

        let Some(&idx) = self.index.get(&id) else {
            tracing::trace!(card = %id, "flip ignored: unknown card");
            return false;
        };

        let card = &mut self.cards[idx];
        if !card.is_flippable() {
            tracing::trace!(card = %id, "flip ignored: card already face up or matched");
            return false;
        }
        card.flipped = true;

        self.flipped.push(id);
        self.events.push(SessionEvent::CardFlipped { card: id });
        tracing::debug!(card = %id, buffered = self.flipped.len(), "card flipped");

        if self.flipped.len() == 2 {
            self.evaluating = true;
            self.pending_evaluation = Some(
                self.clock
                    .schedule(self.config.reveal_delay_ms, TimerEvent::Evaluate),
            );
        }
        true
    }

    /// Move session time forward, dispatching every timer that comes due.
    ///
    /// Timers scheduled while dispatching also fire if they fall inside the
    /// same window, so one large advance behaves like many small ones.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let deadline = self.clock.now().saturating_add(elapsed_ms);
        while let Some((handle, event)) = self.clock.pop_due(deadline) {
            tracing::debug!(timer = %handle, ?event, at = self.clock.now(), "timer fired");
            self.dispatch(event);
        }
    }

    /// One countdown step: decrement the remaining time, floored at zero.
    ///
    /// Driven by the countdown timer; has no effect unless playing.
    pub fn tick(&mut self) {
        if self.status != Status::Playing {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.events.push(SessionEvent::Tick {
            remaining: self.time_remaining,
        });
        self.check_game_over();
    }

    /// Cancel every pending timer. Call when the host discards the game.
    ///
    /// The session stays readable; nothing mutates it again until the next
    /// `restart`.
    pub fn shutdown(&mut self) {
        self.clock.cancel_all();
        self.countdown = None;
        self.pending_evaluation = None;
        self.pending_unflip = None;
        self.notification_timer = None;
        tracing::debug!("memory session timers cancelled");
    }

    // === Timer Handling ===

    fn dispatch(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick => self.tick(),
            TimerEvent::Evaluate => {
                self.pending_evaluation = None;
                self.evaluate();
            }
            TimerEvent::Unflip { first, second } => {
                self.pending_unflip = None;
                self.unflip(first, second);
            }
            TimerEvent::ClearNotification => {
                self.notification_timer = None;
                self.notification = None;
            }
        }
    }

    /// Judge the buffered pair and apply the verdict.
    fn evaluate(&mut self) {
        if self.status != Status::Playing || self.flipped.len() != 2 {
            return;
        }
        let (first, second) = (self.flipped[0], self.flipped[1]);

        let verdict = match (self.card(first), self.card(second)) {
            (Some(a), Some(b)) => self.evaluator.judge(a, b, self.combo),
            _ => Verdict::Mismatch,
        };

        match verdict {
            Verdict::Match(award) => {
                for id in [first, second] {
                    if let Some(&i) = self.index.get(&id) {
                        self.cards[i].matched = true;
                    }
                }

                let points = award.total();
                self.score = self.score.saturating_add(points);
                self.combo = award.combo;
                tracing::debug!(
                    %first,
                    %second,
                    points,
                    combo = self.combo,
                    score = self.score,
                    "pair matched"
                );
                self.events.push(SessionEvent::Matched {
                    first,
                    second,
                    points,
                    combo: self.combo,
                });

                if award.is_power_match() {
                    self.events.push(SessionEvent::PowerMatch { first, second });
                    self.notify(Notification::PowerMatch);
                }
                if award.is_combo_bonus() {
                    self.events.push(SessionEvent::ComboBonus {
                        combo: self.combo,
                        bonus: award.combo_bonus,
                    });
                    self.notify(Notification::ComboBonus {
                        bonus: award.combo_bonus,
                    });
                }

                self.flipped.clear();
                self.evaluating = false;
                self.check_game_over();
            }
            Verdict::Mismatch => {
                for id in [first, second] {
                    if let Some(&i) = self.index.get(&id) {
                        self.cards[i].mismatch_flash = true;
                    }
                }
                self.combo = 0;
                tracing::debug!(%first, %second, "pair mismatched");
                self.events.push(SessionEvent::Mismatched { first, second });

                // The buffer and the evaluating guard stay set until the unflip.
                let unflip = TimerEvent::Unflip { first, second };
                self.pending_unflip =
                    Some(self.clock.schedule(self.config.mismatch_delay_ms, unflip));
            }
        }
    }

    fn unflip(&mut self, first: CardId, second: CardId) {
        for id in [first, second] {
            if let Some(&i) = self.index.get(&id) {
                self.cards[i].reset_face();
            }
        }
        self.flipped.clear();
        self.evaluating = false;
        self.events.push(SessionEvent::Unflipped { first, second });
    }

    fn notify(&mut self, notification: Notification) {
        if let Some(handle) = self.notification_timer.take() {
            self.clock.cancel(handle);
        }
        self.notification = Some(notification);
        self.notification_timer = Some(
            self.clock
                .schedule(self.config.notification_ms, TimerEvent::ClearNotification),
        );
    }

    // === Game Over ===

    fn check_game_over(&mut self) {
        if self.status != Status::Playing {
            return;
        }
        if self.all_matched() {
            self.finish(GameOverReason::AllMatched);
        } else if self.time_remaining == 0 {
            self.finish(GameOverReason::TimeUp);
        }
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.status = Status::Over;

        for handle in [
            self.countdown.take(),
            self.pending_evaluation.take(),
            self.pending_unflip.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.clock.cancel(handle);
        }

        // An unresolved pair at time-up is discarded face down, never judged.
        for id in std::mem::take(&mut self.flipped) {
            if let Some(&i) = self.index.get(&id) {
                self.cards[i].reset_face();
            }
        }
        self.evaluating = false;

        let new_record = self.score > self.high_score;
        if new_record {
            self.high_score = self.score;
            self.store.write(self.score);
            tracing::info!(score = self.score, "new high score");
        }

        tracing::info!(
            ?reason,
            score = self.score,
            high_score = self.high_score,
            "memory session over"
        );
        self.events.push(SessionEvent::GameOver {
            reason,
            score: self.score,
            high_score: self.high_score,
            new_record,
        });
    }
}
