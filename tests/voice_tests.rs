//! Voice-repeat round integration tests.

use word_memory::speech::{
    compare_spoken, Lexicon, SpeechError, VoiceRound, VoiceStatus, DEFAULT_THRESHOLD, LANGUAGES,
};

fn say(round: &mut VoiceRound, text: &str) -> VoiceStatus {
    round.start_listening().unwrap();
    round.final_result(text)
}

// =============================================================================
// Full Rounds
// =============================================================================

#[test]
fn test_every_word_accepts_itself() {
    for language in LANGUAGES {
        let mut round = VoiceRound::new(Lexicon::for_language(language));
        for _ in 0..round.lexicon().len() {
            let word = round.target().unwrap().word.clone();
            assert_eq!(say(&mut round, &word), VoiceStatus::Match, "{} / {}", language, word);
            round.next_word();
        }
        assert_eq!(round.target_index(), 0);
    }
}

#[test]
fn test_recognizer_casing_and_padding() {
    let mut round = VoiceRound::new(Lexicon::english());
    assert_eq!(say(&mut round, "  APPLE  "), VoiceStatus::Match);

    let outcome = round.outcome().unwrap();
    assert!(outcome.is_match);
    assert_eq!(outcome.similarity, 1.0);
    assert_eq!(round.transcript(), "  APPLE  ");
}

#[test]
fn test_wrong_word_is_rejected() {
    let mut round = VoiceRound::new(Lexicon::english());
    round.next_word();
    assert_eq!(round.target().unwrap().word, "Book");

    assert_eq!(say(&mut round, "tree"), VoiceStatus::Mismatch);
    round.recognition_ended();
    assert_eq!(round.status(), VoiceStatus::Mismatch);
}

#[test]
fn test_tamil_near_miss() {
    let mut round = VoiceRound::new(Lexicon::for_language("ta"));
    round.next_word();

    // புத்தகம் with one sign dropped
    assert_eq!(say(&mut round, "புத்தகம"), VoiceStatus::Match);
}

#[test]
fn test_locale_follows_language() {
    assert_eq!(VoiceRound::new(Lexicon::for_language("si")).locale(), "si-LK");
    assert_eq!(VoiceRound::new(Lexicon::for_language("xx")).locale(), "en-US");
}

// =============================================================================
// Recognizer Lifecycle
// =============================================================================

#[test]
fn test_error_then_retry() {
    let mut round = VoiceRound::default();
    round.start_listening().unwrap();
    assert_eq!(round.recognition_error("no-speech"), SpeechError::NoSpeech);
    assert_eq!(round.status(), VoiceStatus::Error);
    assert!(!round.is_busy());

    assert_eq!(say(&mut round, "apple"), VoiceStatus::Match);
    assert_eq!(round.error(), None);
}

#[test]
fn test_busy_while_listening() {
    let mut round = VoiceRound::default();
    assert!(!round.is_busy());

    round.start_listening().unwrap();
    assert!(round.is_busy());

    // Starting again keeps the current attempt.
    round.interim("ap");
    round.start_listening().unwrap();
    assert_eq!(round.transcript(), "ap");
}

#[test]
fn test_next_word_resets_round() {
    let mut round = VoiceRound::default();
    say(&mut round, "banana");
    round.next_word();

    assert_eq!(round.status(), VoiceStatus::Idle);
    assert!(round.transcript().is_empty());
    assert!(round.outcome().is_none());
}

#[test]
fn test_custom_threshold() {
    let mut strict = VoiceRound::default().with_threshold(0.95);
    assert_eq!(say(&mut strict, "appel"), VoiceStatus::Mismatch);

    let mut loose = VoiceRound::default().with_threshold(0.5);
    assert_eq!(say(&mut loose, "appel"), VoiceStatus::Match);

    assert!(!compare_spoken("appel", "apple", DEFAULT_THRESHOLD).is_match);
}
