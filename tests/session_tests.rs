//! Session integration tests.
//!
//! These drive whole games through the public API: scoring sequences,
//! mismatch timing, time-up, game-over finality and restart.

use word_memory::cards::{CardId, Concept, ConceptList};
use word_memory::clock::Scheduler;
use word_memory::core::{DeckLayout, GameConfig};
use word_memory::session::{
    GameOverReason, Notification, Session, SessionBuilder, SessionEvent, Status,
};
use word_memory::store::{HighScoreStore, KeyedHighScore, MemoryStore};

fn started(seed: u64) -> Session {
    let mut session = SessionBuilder::new().seed(seed).build().unwrap();
    session.restart();
    session.drain_events();
    session
}

fn pair<H: HighScoreStore>(session: &Session<H>, key: &str) -> (CardId, CardId) {
    let ids: Vec<_> = session
        .cards()
        .iter()
        .filter(|c| c.pair_key == key)
        .map(|c| c.id)
        .collect();
    assert_eq!(ids.len(), 2, "expected exactly two cards for {}", key);
    (ids[0], ids[1])
}

/// One card from each of two different pairs.
fn mismatch<H: HighScoreStore>(session: &Session<H>, a: &str, b: &str) -> (CardId, CardId) {
    (pair(session, a).0, pair(session, b).0)
}

fn play_pair<H: HighScoreStore>(session: &mut Session<H>, key: &str) {
    let (a, b) = pair(session, key);
    assert!(session.flip(a));
    assert!(session.flip(b));
    session.advance(600);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_scoring_sequence() {
    let mut session = started(42);

    play_pair(&mut session, "apple");
    assert_eq!(session.score(), 10);
    assert_eq!(session.combo(), 1);

    play_pair(&mut session, "sun");
    assert_eq!(session.score(), 50);
    assert_eq!(session.combo(), 2);

    play_pair(&mut session, "car");
    assert_eq!(session.score(), 70);
    assert_eq!(session.combo(), 3);
}

#[test]
fn test_scoring_events() {
    let mut session = started(42);
    play_pair(&mut session, "apple");
    play_pair(&mut session, "sun");
    play_pair(&mut session, "car");

    let points: Vec<u32> = session
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            SessionEvent::Matched { points, .. } => Some(points),
            _ => None,
        })
        .collect();

    assert_eq!(points, vec![10, 40, 20]);
}

#[test]
fn test_combo_bonus_repeats() {
    let concepts = ConceptList::new(
        (0..6)
            .map(|i| Concept::new(format!("c{}", i), format!("Word {}", i), format!("c{}.png", i)))
            .collect(),
    )
    .unwrap();
    let mut session = SessionBuilder::new().concepts(concepts).seed(1).build().unwrap();
    session.restart();

    for i in 0..6 {
        play_pair(&mut session, &format!("c{}", i));
    }

    // 6 * 10 base + bonus at combo 3 and combo 6
    assert_eq!(session.score(), 80);
    assert!(session.is_game_over());
}

#[test]
fn test_definition_bonus() {
    let config = GameConfig::new().with_layout(DeckLayout::WordDefinition);
    let mut session = SessionBuilder::new().config(config).seed(3).build().unwrap();
    session.restart();

    play_pair(&mut session, "book");
    assert_eq!(session.score(), 15);
}

#[test]
fn test_mixed_layout_falls_back_to_image() {
    let concepts = ConceptList::new(vec![
        Concept::new("cat", "Cat", "cat.png"),
        Concept::new("dog", "Dog", "dog.png").with_definition("A loyal pet"),
    ])
    .unwrap();
    let config = GameConfig::new().with_layout(DeckLayout::Mixed);
    let mut session = SessionBuilder::new()
        .concepts(concepts)
        .config(config)
        .seed(4)
        .build()
        .unwrap();
    session.restart();

    play_pair(&mut session, "cat");
    assert_eq!(session.score(), 10);
    play_pair(&mut session, "dog");
    assert_eq!(session.score(), 25);
}

// =============================================================================
// Mismatch
// =============================================================================

#[test]
fn test_mismatch_unflips_after_delay() {
    let mut session = started(7);
    play_pair(&mut session, "tree");
    assert_eq!(session.combo(), 1);

    let (a, b) = mismatch(&session, "apple", "book");
    session.flip(a);
    session.flip(b);
    session.advance(600);

    assert_eq!(session.combo(), 0);
    assert_eq!(session.score(), 10);
    assert!(session.card(a).unwrap().mismatch_flash);
    assert!(session.card(b).unwrap().flipped);
    assert!(session.is_evaluating());

    session.advance(999);
    assert!(session.card(a).unwrap().flipped);

    session.advance(1);
    let card_a = session.card(a).unwrap();
    assert!(!card_a.flipped);
    assert!(!card_a.mismatch_flash);
    assert!(!session.card(b).unwrap().flipped);
    assert!(session.flipped().is_empty());
    assert!(!session.is_evaluating());
    assert_eq!(session.score(), 10);
}

#[test]
fn test_no_flips_while_evaluating() {
    let mut session = started(7);
    let (a, b) = mismatch(&session, "apple", "book");
    let (c, _) = pair(&session, "car");

    session.flip(a);
    session.flip(b);
    session.drain_events();
    assert!(!session.flip(c));
    assert_rejected(&mut session, c, &[a, b]);

    session.advance(600);
    session.drain_events();
    assert!(!session.flip(c));
    assert_rejected(&mut session, c, &[a, b]);

    session.advance(1000);
    assert!(session.flip(c));
}

/// A rejected flip leaves the card, the buffer and the event queue untouched.
fn assert_rejected(session: &mut Session, card: CardId, buffered: &[CardId]) {
    assert!(!session.card(card).unwrap().flipped);
    assert_eq!(session.flipped(), buffered);
    assert!(session.is_evaluating());
    assert!(!session
        .drain_events()
        .iter()
        .any(|e| matches!(e, SessionEvent::CardFlipped { .. })));
}

#[test]
fn test_mismatched_cards_can_be_reflipped() {
    let mut session = started(9);
    let (a, b) = mismatch(&session, "sun", "tree");
    session.flip(a);
    session.flip(b);
    session.advance(1600);

    let (sun_a, sun_b) = pair(&session, "sun");
    assert!(session.flip(sun_a));
    assert!(session.flip(sun_b));
    session.advance(600);
    assert_eq!(session.score(), 40);
}

// =============================================================================
// Game Over
// =============================================================================

#[test]
fn test_time_up_with_pairs_left() {
    let mut session = SessionBuilder::new().seed(11).store(20u32).build().unwrap();
    session.restart();
    play_pair(&mut session, "apple");
    play_pair(&mut session, "car");

    session.advance(90_000);

    assert_eq!(session.status(), Status::Over);
    assert_eq!(session.time_remaining(), 0);
    assert_eq!(session.high_score(), 20);
    assert_eq!(*session.store(), 20);

    let events = session.drain_events();
    assert!(events.contains(&SessionEvent::GameOver {
        reason: GameOverReason::TimeUp,
        score: 20,
        high_score: 20,
        new_record: false,
    }));
}

#[test]
fn test_time_up_new_record() {
    let mut session = SessionBuilder::new()
        .seed(11)
        .store(KeyedHighScore::new(MemoryStore::new()))
        .build()
        .unwrap();
    session.restart();
    play_pair(&mut session, "apple");

    session.advance(90_000);

    assert!(session.is_game_over());
    assert_eq!(session.high_score(), 10);
    assert_eq!(session.store().read(), 10);
}

#[test]
fn test_timer_stops_at_game_over() {
    let mut session = started(2);
    session.advance(90_000);
    assert!(session.is_game_over());

    let ticks_before = session.drain_events().len();
    assert!(ticks_before > 0);

    session.advance(10_000);
    assert!(session.drain_events().is_empty());
    assert_eq!(session.clock().pending_count(), 0);
}

#[test]
fn test_all_matched_ends_game() {
    let mut session = started(5);
    for key in ["apple", "car", "book", "sun", "tree"] {
        play_pair(&mut session, key);
    }

    assert!(session.is_game_over());
    assert!(session.all_matched());
    assert_eq!(session.view().matched_pairs(), 5);

    let remaining = session.time_remaining();
    session.advance(5_000);
    assert_eq!(session.time_remaining(), remaining);
}

#[test]
fn test_game_over_is_final() {
    let mut session = started(6);
    session.advance(90_000);
    let score = session.score();
    let (a, _) = pair(&session, "tree");

    assert!(!session.flip(a));
    session.tick();
    assert_eq!(session.score(), score);
    assert_eq!(session.status(), Status::Over);
}

/// Counts writes so tests can tell a skipped write from a no-op one.
#[derive(Default)]
struct CountingStore {
    best: u32,
    writes: u32,
}

impl HighScoreStore for CountingStore {
    fn read(&self) -> u32 {
        self.best
    }

    fn write(&mut self, score: u32) {
        self.best = score;
        self.writes += 1;
    }
}

#[test]
fn test_tied_high_score_is_not_written() {
    let store = CountingStore { best: 10, writes: 0 };
    let mut session = SessionBuilder::new().seed(11).store(store).build().unwrap();
    session.restart();
    play_pair(&mut session, "apple");
    session.advance(90_000);

    assert!(session.is_game_over());
    assert_eq!(session.score(), 10);
    assert_eq!(session.high_score(), 10);
    assert_eq!(session.store().writes, 0);
    assert!(session.drain_events().contains(&SessionEvent::GameOver {
        reason: GameOverReason::TimeUp,
        score: 10,
        high_score: 10,
        new_record: false,
    }));
}

#[test]
fn test_new_record_written_exactly_once() {
    let mut session = SessionBuilder::new()
        .seed(11)
        .store(CountingStore::default())
        .build()
        .unwrap();
    session.restart();
    play_pair(&mut session, "apple");
    session.advance(100_000);

    assert_eq!(session.store().writes, 1);
    assert_eq!(session.store().best, 10);
}

#[test]
fn test_oversized_point_values_do_not_overflow() {
    let config =
        GameConfig::from_json(r#"{"scoring":{"base":4294967295,"power_bonus":1}}"#).unwrap();
    let mut session = SessionBuilder::new().config(config).seed(11).build().unwrap();
    session.restart();

    play_pair(&mut session, "sun");
    assert_eq!(session.score(), u32::MAX);

    play_pair(&mut session, "apple");
    assert_eq!(session.score(), u32::MAX);
}

#[test]
fn test_high_score_written_once() {
    let mut session = SessionBuilder::new().seed(5).store(0u32).build().unwrap();
    session.restart();
    for key in ["apple", "car", "book", "sun", "tree"] {
        play_pair(&mut session, key);
    }
    let best = session.high_score();
    assert!(best > 0);

    let game_overs = session
        .drain_events()
        .iter()
        .filter(|e| matches!(e, SessionEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);

    // A worse game does not lower the record.
    session.restart();
    session.advance(90_000);
    assert_eq!(session.high_score(), best);
    assert_eq!(*session.store(), best);
}

// =============================================================================
// Restart
// =============================================================================

#[test]
fn test_restart_cancels_pending_unflip() {
    let mut session = started(8);
    let (a, b) = mismatch(&session, "apple", "car");
    session.flip(a);
    session.flip(b);
    session.advance(600);

    session.restart();
    let (c, _) = pair(&session, "book");
    assert!(session.flip(c));

    // The old unflip would have fired here.
    session.advance(1000);
    assert!(session.card(c).unwrap().flipped);
    assert_eq!(session.flipped(), &[c]);
}

#[test]
fn test_restart_after_game_over() {
    let mut session = started(8);
    session.advance(90_000);
    assert!(session.is_game_over());

    session.restart();
    assert_eq!(session.status(), Status::Playing);
    assert_eq!(session.time_remaining(), 90);

    session.advance(3_000);
    assert_eq!(session.time_remaining(), 87);
}

#[test]
fn test_restart_reshuffles() {
    let mut session = started(13);
    let first: Vec<_> = session.cards().iter().map(|c| c.id).collect();

    let reshuffled = (0..10).any(|_| {
        session.restart();
        session.cards().iter().map(|c| c.id).collect::<Vec<_>>() != first
    });
    assert!(reshuffled);
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_newer_notification_keeps_full_duration() {
    let concepts = ConceptList::new(vec![
        Concept::new("a", "A", "a.png").power(),
        Concept::new("b", "B", "b.png").power(),
        Concept::new("c", "C", "c.png"),
    ])
    .unwrap();
    let mut session = SessionBuilder::new().concepts(concepts).seed(2).build().unwrap();
    session.restart();

    play_pair(&mut session, "a");
    session.advance(500);
    play_pair(&mut session, "b");
    assert_eq!(session.notification(), Some(Notification::PowerMatch));

    // The first banner's timer would clear it 1500 ms after the first match.
    session.advance(500);
    assert!(session.notification().is_some());

    session.advance(1000);
    assert_eq!(session.notification(), None);
}

#[test]
fn test_configured_delays() {
    let config = GameConfig::new()
        .with_reveal_delay(100)
        .with_mismatch_delay(200)
        .with_notification_time(300);
    let mut session = SessionBuilder::new().config(config).seed(21).build().unwrap();
    session.restart();

    let (a, b) = pair(&session, "sun");
    session.flip(a);
    session.flip(b);
    session.advance(100);
    assert_eq!(session.score(), 40);

    session.advance(300);
    assert_eq!(session.notification(), None);

    let (c, d) = mismatch(&session, "apple", "tree");
    session.flip(c);
    session.flip(d);
    session.advance(300);
    assert!(!session.is_evaluating());
    assert!(!session.card(c).unwrap().flipped);
}
