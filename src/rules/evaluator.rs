//! Match evaluation and scoring.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::core::config::ScoringRules;

/// Points earned by one correct pair, broken down by rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub base: u32,
    pub definition_bonus: u32,
    pub power_bonus: u32,
    pub combo_bonus: u32,
    /// Combo streak after this match.
    pub combo: u32,
}

impl Award {
    /// Total points for the pair, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.base
            .saturating_add(self.definition_bonus)
            .saturating_add(self.power_bonus)
            .saturating_add(self.combo_bonus)
    }

    /// Whether the power bonus applied.
    #[must_use]
    pub fn is_power_match(&self) -> bool {
        self.power_bonus > 0
    }

    /// Whether this match completed a combo period.
    #[must_use]
    pub fn is_combo_bonus(&self) -> bool {
        self.combo_bonus > 0
    }
}

/// Outcome of judging two face-up cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The cards share a concept.
    Match(Award),
    /// Different concepts; the combo streak is broken.
    Mismatch,
}

impl Verdict {
    /// Check if this is a match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match(_))
    }
}

/// Judges a completed pair and prices it under `ScoringRules`.
///
/// ## Example
///
/// ```
/// use word_memory::cards::{Card, CardId, CardKind};
/// use word_memory::core::ScoringRules;
/// use word_memory::rules::{MatchEvaluator, Verdict};
///
/// let evaluator = MatchEvaluator::new(ScoringRules::default());
/// let word = Card::new(CardId::new(1), CardKind::Word, "Sun", "sun").power(true);
/// let image = Card::new(CardId::new(2), CardKind::Image, "sun.png", "sun");
///
/// match evaluator.judge(&word, &image, 0) {
///     Verdict::Match(award) => assert_eq!(award.total(), 40),
///     Verdict::Mismatch => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchEvaluator {
    rules: ScoringRules,
}

impl MatchEvaluator {
    /// Create an evaluator for the given rules.
    #[must_use]
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// The rules this evaluator prices matches with.
    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Judge a pair given the combo streak before it.
    ///
    /// The combo bonus fires on every positive multiple of the combo period,
    /// so a streak of 3, 6, 9... each earns it.
    #[must_use]
    pub fn judge(&self, a: &Card, b: &Card, combo_before: u32) -> Verdict {
        if !a.pairs_with(b) {
            return Verdict::Mismatch;
        }

        let combo = combo_before.saturating_add(1);
        let has_definition = a.kind == CardKind::Definition || b.kind == CardKind::Definition;
        let has_power = a.is_power || b.is_power;
        let period = self.rules.combo_period;

        Verdict::Match(Award {
            base: self.rules.base,
            definition_bonus: if has_definition { self.rules.definition_bonus } else { 0 },
            power_bonus: if has_power { self.rules.power_bonus } else { 0 },
            combo_bonus: if period > 0 && combo % period == 0 { self.rules.combo_bonus } else { 0 },
            combo,
        })
    }
}
