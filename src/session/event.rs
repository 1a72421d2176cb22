//! Session events, timer events and notifications.
//!
//! `TimerEvent`s are what the session schedules on its clock. `SessionEvent`s
//! are what it reports to the host: every state change appends one to a
//! queue drained with `Session::drain_events`.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Delayed work the session schedules on its clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Countdown step.
    Tick,
    /// Judge the two face-up cards.
    Evaluate,
    /// Turn a mismatched pair face down again.
    Unflip { first: CardId, second: CardId },
    /// Take down the current notification.
    ClearNotification,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    TimeUp,
    AllMatched,
}

/// One-shot celebration shown after a special match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    PowerMatch,
    ComboBonus { bonus: u32 },
}

impl Notification {
    /// Banner text for the notification.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Notification::PowerMatch => "🔥 POWER MATCH! 🔥".to_string(),
            Notification::ComboBonus { bonus } => format!("💥 COMBO BONUS! +{} 💥", bonus),
        }
    }
}

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A fresh deck was dealt and the countdown started.
    Started { pairs: usize, duration_secs: u32 },

    /// A card was turned face up.
    CardFlipped { card: CardId },

    /// Two cards formed a pair. `points` includes every bonus.
    Matched {
        first: CardId,
        second: CardId,
        points: u32,
        combo: u32,
    },

    /// A power pair was matched.
    PowerMatch { first: CardId, second: CardId },

    /// A combo period was completed.
    ComboBonus { combo: u32, bonus: u32 },

    /// Two cards did not match; the combo streak is reset.
    Mismatched { first: CardId, second: CardId },

    /// A mismatched pair was turned face down.
    Unflipped { first: CardId, second: CardId },

    /// The countdown moved.
    Tick { remaining: u32 },

    /// The session finished.
    GameOver {
        reason: GameOverReason,
        score: u32,
        high_score: u32,
        new_record: bool,
    },
}
