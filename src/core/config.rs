//! Game configuration types.
//!
//! A host configures the engine at startup with a `GameConfig`:
//! - countdown length and timer delays
//! - `ScoringRules` for match awards and combo bonuses
//! - `DeckLayout` choosing which partner card each concept gets
//!
//! `GameConfig::default()` reproduces the classic game: 90 seconds, a 600 ms
//! reveal, a 1000 ms mismatch flash and 1500 ms notifications.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};

/// Which card partners the word card of each concept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckLayout {
    /// Word card paired with an image card.
    #[default]
    WordImage,
    /// Word card paired with a definition card. Every concept needs a definition.
    WordDefinition,
    /// Definition card where the concept has one, image card otherwise.
    Mixed,
}

/// Point awards applied by the match evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Awarded for every correct pair.
    pub base: u32,
    /// Extra when either card of the pair is a definition card.
    pub definition_bonus: u32,
    /// Extra when either card of the pair is a power card.
    pub power_bonus: u32,
    /// Every `combo_period`-th consecutive match earns `combo_bonus`.
    pub combo_period: u32,
    pub combo_bonus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base: 10,
            definition_bonus: 5,
            power_bonus: 30,
            combo_period: 3,
            combo_bonus: 10,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown length in seconds.
    pub duration_secs: u32,

    /// Countdown tick interval.
    pub tick_interval_ms: u64,

    /// How long both faces stay visible before the pair is judged.
    pub reveal_delay_ms: u64,

    /// How long a mismatched pair flashes before flipping back.
    pub mismatch_delay_ms: u64,

    /// How long a power-match or combo notification stays up.
    pub notification_ms: u64,

    pub layout: DeckLayout,

    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: 90,
            tick_interval_ms: 1000,
            reveal_delay_ms: 600,
            mismatch_delay_ms: 1000,
            notification_ms: 1500,
            layout: DeckLayout::WordImage,
            scoring: ScoringRules::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the countdown length.
    #[must_use]
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Set the reveal delay before a pair is judged.
    #[must_use]
    pub fn with_reveal_delay(mut self, ms: u64) -> Self {
        self.reveal_delay_ms = ms;
        self
    }

    /// Set the mismatch flash delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Set the notification display time.
    #[must_use]
    pub fn with_notification_time(mut self, ms: u64) -> Self {
        self.notification_ms = ms;
        self
    }

    /// Set the deck layout.
    #[must_use]
    pub fn with_layout(mut self, layout: DeckLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// Reject configurations the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.duration_secs == 0 {
            return Err(ConfigError::InvalidConfig("duration must be at least one second"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidConfig("tick interval must be positive"));
        }
        if self.scoring.combo_period == 0 {
            return Err(ConfigError::InvalidConfig("combo period must be positive"));
        }
        Ok(())
    }
}
