//! One voice-repeat round driven by recognizer callbacks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lexicon::{Lexicon, SpokenWord};
use super::similarity::{compare_spoken, SpokenMatch, DEFAULT_THRESHOLD};

/// How long a host should listen before calling
/// [`VoiceRound::listen_timeout`].
pub const LISTEN_TIMEOUT_MS: u64 = 5_000;

/// Recognition failures.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SpeechError {
    #[error("no speech was detected")]
    NoSpeech,

    #[error("microphone access was not allowed")]
    NotAllowed,

    #[error("speech recognition is not supported")]
    NotSupported,

    #[error("speech recognition failed: {0}")]
    Other(String),
}

impl SpeechError {
    /// Map a recognizer error code (`no-speech`, `not-allowed`, ...).
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => SpeechError::NoSpeech,
            "not-allowed" => SpeechError::NotAllowed,
            other => SpeechError::Other(other.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceStatus {
    #[default]
    Idle,
    Listening,
    Checking,
    Match,
    Mismatch,
    Error,
}

/// Ask the player to say a word and judge what the recognizer heard.
///
/// The host owns the recognizer and forwards its callbacks:
/// [`interim`](Self::interim) for partial transcripts,
/// [`final_result`](Self::final_result) for the last one,
/// [`recognition_ended`](Self::recognition_ended) and
/// [`recognition_error`](Self::recognition_error).
///
/// ## Example
///
/// ```
/// use word_memory::speech::{Lexicon, VoiceRound, VoiceStatus};
///
/// let mut round = VoiceRound::new(Lexicon::english());
/// assert_eq!(round.target().unwrap().word, "Apple");
///
/// round.start_listening().unwrap();
/// round.interim("app");
/// round.final_result("apple");
/// assert_eq!(round.status(), VoiceStatus::Match);
///
/// round.next_word();
/// assert_eq!(round.target().unwrap().word, "Book");
/// ```
#[derive(Clone, Debug)]
pub struct VoiceRound {
    lexicon: Lexicon,
    target_index: usize,
    status: VoiceStatus,
    transcript: String,
    outcome: Option<SpokenMatch>,
    error: Option<SpeechError>,
    supported: bool,
    threshold: f64,
}

impl VoiceRound {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            target_index: 0,
            status: VoiceStatus::Idle,
            transcript: String::new(),
            outcome: None,
            error: None,
            supported: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Declare whether the platform has a recognizer at all.
    #[must_use]
    pub fn with_support(mut self, supported: bool) -> Self {
        self.supported = supported;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    // === Accessors ===

    pub fn status(&self) -> VoiceStatus {
        self.status
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Locale the recognizer should listen in.
    pub fn locale(&self) -> &str {
        &self.lexicon.locale
    }

    pub fn target(&self) -> Option<&SpokenWord> {
        self.lexicon.get(self.target_index)
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Latest transcript, interim or final.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Comparison of the final transcript, once there is one.
    pub fn outcome(&self) -> Option<&SpokenMatch> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&SpeechError> {
        self.error.as_ref()
    }

    /// Whether the recognizer is busy and the listen button should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self.status, VoiceStatus::Listening | VoiceStatus::Checking)
    }

    // === Commands ===

    /// Begin listening for the current target.
    ///
    /// Calling again while already listening is a no-op.
    pub fn start_listening(&mut self) -> Result<(), SpeechError> {
        if !self.supported {
            self.fail(SpeechError::NotSupported);
            return Err(SpeechError::NotSupported);
        }
        if self.status == VoiceStatus::Listening {
            return Ok(());
        }

        self.transcript.clear();
        self.outcome = None;
        self.error = None;
        self.status = VoiceStatus::Listening;
        tracing::debug!(locale = %self.lexicon.locale, target = self.target_index, "listening");
        Ok(())
    }

    /// A partial transcript arrived.
    pub fn interim(&mut self, text: &str) {
        if self.status == VoiceStatus::Listening {
            self.transcript = text.to_string();
        }
    }

    /// The final transcript arrived; judge it against the target.
    ///
    /// Ignored unless listening. Returns the resulting status.
    pub fn final_result(&mut self, text: &str) -> VoiceStatus {
        if self.status != VoiceStatus::Listening {
            return self.status;
        }
        self.transcript = text.to_string();
        self.status = VoiceStatus::Checking;

        let Some(target) = self.lexicon.get(self.target_index) else {
            self.fail(SpeechError::Other("empty lexicon".to_string()));
            return self.status;
        };

        let outcome = compare_spoken(text, &target.word, self.threshold);
        self.status = if outcome.is_match {
            VoiceStatus::Match
        } else {
            VoiceStatus::Mismatch
        };
        tracing::debug!(
            heard = text,
            target = %target.word,
            similarity = outcome.similarity,
            status = ?self.status,
            "word checked"
        );
        self.outcome = Some(outcome);
        self.status
    }

    /// The recognizer stopped. An unfinished attempt returns to idle.
    pub fn recognition_ended(&mut self) {
        if self.is_busy() {
            self.status = VoiceStatus::Idle;
        }
    }

    /// The recognizer reported an error code.
    pub fn recognition_error(&mut self, code: &str) -> SpeechError {
        let error = SpeechError::from_code(code);
        self.fail(error.clone());
        error
    }

    /// Listening ran past [`LISTEN_TIMEOUT_MS`] without a final result.
    ///
    /// Returns whether the round was still listening.
    pub fn listen_timeout(&mut self) -> bool {
        if self.status != VoiceStatus::Listening {
            return false;
        }
        self.fail(SpeechError::NoSpeech);
        true
    }

    /// Move to the next word, wrapping around, and reset to idle.
    pub fn next_word(&mut self) {
        if !self.lexicon.is_empty() {
            self.target_index = (self.target_index + 1) % self.lexicon.len();
        }
        self.status = VoiceStatus::Idle;
        self.transcript.clear();
        self.outcome = None;
        self.error = None;
    }

    fn fail(&mut self, error: SpeechError) {
        tracing::warn!(%error, "speech recognition error");
        self.status = VoiceStatus::Error;
        self.error = Some(error);
    }
}

impl Default for VoiceRound {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}
