//! Concept definitions - the static content behind every pair.
//!
//! A `Concept` is one thing the child learns ("apple"). The deck turns each
//! concept into a word card plus a partner card. Swapping the `ConceptList`
//! changes the game content without touching any engine logic.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::config::DeckLayout;
use crate::core::error::{ConfigError, Result};

/// Static data for one pairable concept.
///
/// ## Example
///
/// ```
/// use word_memory::cards::Concept;
///
/// let sun = Concept::new("sun", "Sun", "assets/images/sun.png")
///     .with_definition("The star that gives Earth light and heat")
///     .power();
///
/// assert!(sun.is_power);
/// assert_eq!(sun.word_label, "Sun");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Pair key shared by both cards of this concept.
    pub key: String,

    /// Text shown on the word card.
    pub word_label: String,

    /// Resource reference shown on the image card.
    pub image_ref: String,

    /// Text shown on the definition card, if the concept has one.
    #[serde(default)]
    pub definition: Option<String>,

    /// Whether matching this concept grants the power bonus.
    #[serde(default)]
    pub is_power: bool,
}

impl Concept {
    /// Create a concept with a word and an image.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        word_label: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            word_label: word_label.into(),
            image_ref: image_ref.into(),
            definition: None,
            is_power: false,
        }
    }

    /// Attach a definition text (builder pattern).
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Mark as a power concept (builder pattern).
    #[must_use]
    pub fn power(mut self) -> Self {
        self.is_power = true;
        self
    }
}

/// A validated, non-empty list of concepts with unique keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConceptList {
    concepts: Vec<Concept>,
}

impl ConceptList {
    /// Validate and wrap a list of concepts.
    ///
    /// Fails on an empty list, a blank key or a duplicated key, since any of
    /// these would produce a deck without perfect pairing.
    pub fn new(concepts: Vec<Concept>) -> Result<Self> {
        if concepts.is_empty() {
            return Err(ConfigError::EmptyConceptList);
        }

        let mut seen = FxHashSet::default();
        for (index, concept) in concepts.iter().enumerate() {
            if concept.key.trim().is_empty() {
                return Err(ConfigError::BlankConceptKey { index });
            }
            if !seen.insert(concept.key.as_str()) {
                return Err(ConfigError::DuplicateConceptKey {
                    key: concept.key.clone(),
                });
            }
        }

        Ok(Self { concepts })
    }

    /// Parse and validate a JSON array of concepts.
    pub fn from_json(json: &str) -> Result<Self> {
        let concepts: Vec<Concept> = serde_json::from_str(json)?;
        Self::new(concepts)
    }

    /// The five concepts of the classic game. "sun" is the power pair.
    #[must_use]
    pub fn builtin() -> Self {
        let concepts = vec![
            Concept::new("apple", "Apple", "assets/images/apple.png")
                .with_definition("A sweet fruit, often red or green"),
            Concept::new("car", "Car", "assets/images/car.png")
                .with_definition("A vehicle with four wheels used for transportation"),
            Concept::new("book", "Book", "assets/images/book.png")
                .with_definition("A set of written or printed pages bound together"),
            Concept::new("sun", "Sun", "assets/images/sun.png")
                .with_definition("The star that gives Earth light and heat")
                .power(),
            Concept::new("tree", "Tree", "assets/images/tree.png")
                .with_definition("A tall plant with a trunk, branches and leaves"),
        ];
        Self { concepts }
    }

    /// Check that every concept can be laid out as requested.
    pub fn check_layout(&self, layout: DeckLayout) -> Result<()> {
        if layout != DeckLayout::WordDefinition {
            return Ok(());
        }
        match self.concepts.iter().find(|c| c.definition.is_none()) {
            Some(concept) => Err(ConfigError::MissingDefinition {
                key: concept.key.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Number of concepts (and therefore pairs).
    #[must_use]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Always false; a `ConceptList` is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Iterate over the concepts in order.
    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }
}

impl<'de> Deserialize<'de> for ConceptList {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let concepts = Vec::<Concept>::deserialize(deserializer)?;
        Self::new(concepts).map_err(serde::de::Error::custom)
    }
}
