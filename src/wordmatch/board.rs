//! The word-to-picture matching board.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::ConceptList;
use crate::core::rng::GameRng;

/// Points for every correct word-picture pair.
pub const POINTS_PER_PAIR: u32 = 10;

/// Identifies a concept on the board. A word and its picture share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTile {
    pub id: ItemId,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTile {
    pub id: ItemId,
    pub image_ref: String,
    /// Accessible description of the picture.
    pub alt: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Playing,
    Finished,
}

/// Graded board, available once answers are checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Word id and whether its chosen picture was right, in word order.
    pub results: Vec<(ItemId, bool)>,
    pub correct: usize,
    pub incorrect: usize,
    pub score: u32,
}

impl MatchReport {
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.incorrect == 0
    }
}

/// Pair every word with a picture, then check the whole board at once.
///
/// Words keep concept order; pictures are shuffled. Selecting a word and a
/// picture (in either order) links them. Links are final until restart, and
/// answers can only be checked once every word is linked.
///
/// ## Example
///
/// ```
/// use word_memory::cards::ConceptList;
/// use word_memory::core::GameRng;
/// use word_memory::wordmatch::WordMatchGame;
///
/// let mut game = WordMatchGame::new(&ConceptList::builtin(), GameRng::new(1));
/// let ids: Vec<_> = game.words().iter().map(|w| w.id).collect();
/// for id in ids {
///     game.select_word(id);
///     game.select_image(id);
/// }
///
/// let report = game.check_answers().unwrap();
/// assert!(report.all_correct());
/// assert_eq!(report.score, 50);
/// ```
#[derive(Clone, Debug)]
pub struct WordMatchGame {
    words: Vec<WordTile>,
    images: Vec<ImageTile>,
    selected_word: Option<ItemId>,
    selected_image: Option<ItemId>,
    /// word -> picture
    pairs: FxHashMap<ItemId, ItemId>,
    /// picture -> word
    owners: FxHashMap<ItemId, ItemId>,
    phase: MatchPhase,
    rng: GameRng,
}

impl WordMatchGame {
    /// Lay out a board, one word and one picture per concept.
    pub fn new(concepts: &ConceptList, rng: GameRng) -> Self {
        let mut words = Vec::with_capacity(concepts.len());
        let mut images = Vec::with_capacity(concepts.len());

        for (i, concept) in concepts.iter().enumerate() {
            let id = ItemId::new(i as u32 + 1);
            words.push(WordTile {
                id,
                text: concept.word_label.clone(),
            });
            images.push(ImageTile {
                id,
                image_ref: concept.image_ref.clone(),
                alt: concept.definition.clone().unwrap_or_else(|| concept.word_label.clone()),
            });
        }

        let mut game = Self {
            words,
            images,
            selected_word: None,
            selected_image: None,
            pairs: FxHashMap::default(),
            owners: FxHashMap::default(),
            phase: MatchPhase::Playing,
            rng,
        };
        game.restart();
        game
    }

    // === Accessors ===

    pub fn words(&self) -> &[WordTile] {
        &self.words
    }

    /// Pictures in their shuffled display order.
    pub fn images(&self) -> &[ImageTile] {
        &self.images
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn selected_word(&self) -> Option<ItemId> {
        self.selected_word
    }

    pub fn selected_image(&self) -> Option<ItemId> {
        self.selected_image
    }

    pub fn is_word_paired(&self, word: ItemId) -> bool {
        self.pairs.contains_key(&word)
    }

    pub fn is_image_paired(&self, image: ItemId) -> bool {
        self.owners.contains_key(&image)
    }

    /// Picture linked to `word`, if any.
    pub fn paired_image(&self, word: ItemId) -> Option<ItemId> {
        self.pairs.get(&word).copied()
    }

    /// Word linked to `image`, if any.
    pub fn paired_word(&self, image: ItemId) -> Option<ItemId> {
        self.owners.get(&image).copied()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn all_pairs_made(&self) -> bool {
        !self.words.is_empty() && self.pairs.len() == self.words.len()
    }

    /// The graded board once answers are checked.
    pub fn report(&self) -> Option<MatchReport> {
        if self.phase != MatchPhase::Finished {
            return None;
        }

        let results: Vec<(ItemId, bool)> = self
            .words
            .iter()
            .map(|w| (w.id, self.pairs.get(&w.id) == Some(&w.id)))
            .collect();
        let correct = results.iter().filter(|(_, ok)| *ok).count();

        Some(MatchReport {
            incorrect: results.len() - correct,
            score: (correct as u32).saturating_mul(POINTS_PER_PAIR),
            correct,
            results,
        })
    }

    // === Commands ===

    /// Clear every link and reshuffle the pictures.
    pub fn restart(&mut self) {
        self.rng.shuffle(&mut self.images);
        self.selected_word = None;
        self.selected_image = None;
        self.pairs.clear();
        self.owners.clear();
        self.phase = MatchPhase::Playing;
        tracing::debug!(words = self.words.len(), "word match board dealt");
    }

    /// Select a word. Ignored once finished, for unknown ids and for words
    /// already linked. Returns whether the selection was taken.
    pub fn select_word(&mut self, word: ItemId) -> bool {
        if self.phase == MatchPhase::Finished
            || self.is_word_paired(word)
            || !self.words.iter().any(|w| w.id == word)
        {
            return false;
        }
        self.selected_word = Some(word);
        self.try_link();
        true
    }

    /// Select a picture. Same rules as [`select_word`](Self::select_word).
    pub fn select_image(&mut self, image: ItemId) -> bool {
        if self.phase == MatchPhase::Finished
            || self.is_image_paired(image)
            || !self.images.iter().any(|i| i.id == image)
        {
            return false;
        }
        self.selected_image = Some(image);
        self.try_link();
        true
    }

    /// Grade the board. Does nothing until every word is linked.
    pub fn check_answers(&mut self) -> Option<MatchReport> {
        if !self.all_pairs_made() {
            return None;
        }
        self.phase = MatchPhase::Finished;

        let report = self.report();
        if let Some(report) = &report {
            tracing::info!(correct = report.correct, score = report.score, "word match checked");
        }
        report
    }

    fn try_link(&mut self) {
        if let (Some(word), Some(image)) = (self.selected_word, self.selected_image) {
            self.pairs.insert(word, image);
            self.owners.insert(image, word);
            self.selected_word = None;
            self.selected_image = None;
            tracing::debug!(%word, %image, "linked");
        }
    }
}
