//! Card instances - one face on the table during a session.
//!
//! A `Card` carries its static content (kind, value, pair key, power flag)
//! plus three transient flags owned by the session:
//!
//! - `flipped`: face up
//! - `matched`: part of a solved pair, never flippable again
//! - `mismatch_flash`: presentation hint while a wrong pair is shown

use serde::{Deserialize, Serialize};

/// Stable identity of a card within a session. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Presentation category of a card. Matching ignores it; scoring does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Word,
    Image,
    Definition,
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,

    /// Text or resource reference to render.
    pub value: String,

    /// Concept key; two distinct cards with equal keys form a pair.
    pub pair_key: String,

    pub is_power: bool,

    pub flipped: bool,
    pub matched: bool,
    pub mismatch_flash: bool,
}

impl Card {
    /// Create a face-down card with all transient flags cleared.
    #[must_use]
    pub fn new(
        id: CardId,
        kind: CardKind,
        value: impl Into<String>,
        pair_key: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            value: value.into(),
            pair_key: pair_key.into(),
            is_power: false,
            flipped: false,
            matched: false,
            mismatch_flash: false,
        }
    }

    /// Mark as a power card (builder pattern).
    #[must_use]
    pub fn power(mut self, is_power: bool) -> Self {
        self.is_power = is_power;
        self
    }

    /// Whether a flip on this card would be accepted by the card itself.
    #[must_use]
    pub fn is_flippable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Whether `self` and `other` form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.pair_key == other.pair_key
    }

    /// Turn face down and drop the mismatch hint.
    pub fn reset_face(&mut self) {
        self.flipped = false;
        self.mismatch_flash = false;
    }
}
