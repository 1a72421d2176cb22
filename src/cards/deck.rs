//! The deck: builds paired cards from concepts and deals them shuffled.

use super::definition::{Concept, ConceptList};
use super::instance::{Card, CardId, CardKind};
use crate::core::config::DeckLayout;
use crate::core::error::Result;
use crate::core::rng::GameRng;

/// Canonical set of pairable cards for a game.
///
/// ## Example
///
/// ```
/// use word_memory::cards::{ConceptList, Deck};
/// use word_memory::core::{DeckLayout, GameRng};
///
/// let deck = Deck::new(ConceptList::builtin(), DeckLayout::WordImage).unwrap();
/// let cards = deck.deal(&mut GameRng::new(1));
///
/// assert_eq!(cards.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    concepts: ConceptList,
    layout: DeckLayout,
}

impl Deck {
    /// Create a deck, checking that every concept fits the layout.
    pub fn new(concepts: ConceptList, layout: DeckLayout) -> Result<Self> {
        concepts.check_layout(layout)?;
        Ok(Self { concepts, layout })
    }

    /// Number of pairs in a built deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.concepts.len()
    }

    /// The concept content behind this deck.
    #[must_use]
    pub fn concepts(&self) -> &ConceptList {
        &self.concepts
    }

    /// Build a fresh, unshuffled set of cards.
    ///
    /// Each concept yields a word card followed by its partner, with ids
    /// `2k - 1` and `2k` for the k-th concept. The power flag rides on the
    /// word card.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.concepts.len() * 2);
        let mut next_id = 1u32;

        for concept in self.concepts.iter() {
            let word = Card::new(
                CardId::new(next_id),
                CardKind::Word,
                &concept.word_label,
                &concept.key,
            )
            .power(concept.is_power);
            next_id += 1;

            let (kind, value) = self.partner_face(concept);
            let partner = Card::new(CardId::new(next_id), kind, value, &concept.key);
            next_id += 1;

            cards.push(word);
            cards.push(partner);
        }

        cards
    }

    /// Uniformly permute cards. Identity and pairing are untouched.
    #[must_use]
    pub fn shuffle(mut cards: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
        rng.shuffle(&mut cards);
        cards
    }

    /// Build and shuffle in one step.
    #[must_use]
    pub fn deal(&self, rng: &mut GameRng) -> Vec<Card> {
        Self::shuffle(self.build(), rng)
    }

    fn partner_face<'a>(&self, concept: &'a Concept) -> (CardKind, &'a str) {
        match (self.layout, concept.definition.as_deref()) {
            (DeckLayout::WordDefinition | DeckLayout::Mixed, Some(definition)) => {
                (CardKind::Definition, definition)
            }
            _ => (CardKind::Image, concept.image_ref.as_str()),
        }
    }
}
