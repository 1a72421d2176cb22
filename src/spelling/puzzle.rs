//! Scrambled-letter spelling levels.

use serde::{Deserialize, Serialize};

use crate::cards::ConceptList;
use crate::core::rng::GameRng;

/// One word to spell, with its clue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingLevel {
    pub word: String,
    pub hint: Option<String>,
    pub image_ref: String,
}

/// A letter offered to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    pub letter: char,
    /// Already placed in an answer slot.
    pub chosen: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellingStatus {
    /// Slots still open.
    #[default]
    Playing,
    /// Every slot is filled with the right word.
    Correct,
    /// Every slot is filled, but the word is wrong. Removing a letter resumes.
    Incorrect,
    /// The last level was passed.
    Finished,
}

/// Rebuild each word from its shuffled letters, level by level.
///
/// ## Example
///
/// ```
/// use word_memory::cards::ConceptList;
/// use word_memory::core::GameRng;
/// use word_memory::spelling::{SpellingGame, SpellingStatus};
///
/// let mut game = SpellingGame::new(&ConceptList::builtin(), GameRng::new(5));
/// assert_eq!(game.level().word, "Apple");
///
/// for letter in "apple".chars() {
///     let tile = game
///         .tiles()
///         .iter()
///         .position(|t| !t.chosen && t.letter.eq_ignore_ascii_case(&letter))
///         .unwrap();
///     game.select_letter(tile);
/// }
/// assert_eq!(game.status(), SpellingStatus::Correct);
/// ```
#[derive(Clone, Debug)]
pub struct SpellingGame {
    levels: Vec<SpellingLevel>,
    level_index: usize,
    tiles: Vec<LetterTile>,
    /// Answer slots, each holding the index of the tile placed there.
    slots: Vec<Option<usize>>,
    status: SpellingStatus,
    rng: GameRng,
}

impl SpellingGame {
    /// One level per concept, in concept order, starting at the first.
    pub fn new(concepts: &ConceptList, rng: GameRng) -> Self {
        let levels = concepts
            .iter()
            .map(|c| SpellingLevel {
                word: c.word_label.clone(),
                hint: c.definition.clone(),
                image_ref: c.image_ref.clone(),
            })
            .collect();

        let mut game = Self {
            levels,
            level_index: 0,
            tiles: Vec::new(),
            slots: Vec::new(),
            status: SpellingStatus::Playing,
            rng,
        };
        game.load_level();
        game
    }

    // === Accessors ===

    pub fn status(&self) -> SpellingStatus {
        self.status
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The level being played. After the last level this stays on it.
    pub fn level(&self) -> &SpellingLevel {
        &self.levels[self.level_index]
    }

    /// Letters in their scrambled order.
    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    /// Letter in each answer slot.
    pub fn slots(&self) -> Vec<Option<char>> {
        self.slots.iter().map(|s| s.map(|t| self.tiles[t].letter)).collect()
    }

    /// Letters placed so far, in slot order, skipping gaps.
    pub fn answer(&self) -> String {
        self.slots.iter().flatten().map(|&t| self.tiles[t].letter).collect()
    }

    pub fn all_letters_chosen(&self) -> bool {
        self.tiles.iter().all(|t| t.chosen)
    }

    // === Commands ===

    /// Place a tile in the first open slot.
    ///
    /// Ignored unless playing, for chosen or unknown tiles, and when no slot
    /// is open. Filling the last slot checks the answer.
    pub fn select_letter(&mut self, tile: usize) -> bool {
        if self.status != SpellingStatus::Playing {
            return false;
        }
        match self.tiles.get(tile) {
            Some(t) if !t.chosen => {}
            _ => return false,
        }
        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            return false;
        };

        self.slots[slot] = Some(tile);
        self.tiles[tile].chosen = true;

        if self.slots.iter().all(Option::is_some) {
            self.check_answer();
        }
        true
    }

    /// Take the letter out of `slot` and hand its tile back.
    ///
    /// Allowed while playing or after a wrong answer; a wrong answer goes
    /// back to playing.
    pub fn remove_letter(&mut self, slot: usize) -> bool {
        if !matches!(self.status, SpellingStatus::Playing | SpellingStatus::Incorrect) {
            return false;
        }
        let Some(tile) = self.slots.get_mut(slot).and_then(Option::take) else {
            return false;
        };
        self.tiles[tile].chosen = false;
        self.status = SpellingStatus::Playing;
        true
    }

    /// Rescramble the current level and clear the answer.
    pub fn retry_level(&mut self) {
        self.load_level();
    }

    /// Move to the next level, or finish after the last one.
    pub fn next_level(&mut self) {
        if self.level_index + 1 < self.levels.len() {
            self.level_index += 1;
            self.load_level();
        } else {
            self.status = SpellingStatus::Finished;
            tracing::info!(levels = self.levels.len(), "spelling game finished");
        }
    }

    /// Start over from the first level.
    pub fn restart(&mut self) {
        self.level_index = 0;
        self.load_level();
    }

    fn load_level(&mut self) {
        let Some(level) = self.levels.get(self.level_index) else {
            return;
        };
        let mut letters: Vec<char> = level.word.chars().collect();
        self.rng.shuffle(&mut letters);

        self.slots = vec![None; letters.len()];
        self.tiles = letters
            .into_iter()
            .map(|letter| LetterTile { letter, chosen: false })
            .collect();
        self.status = SpellingStatus::Playing;
        tracing::debug!(level = self.level_index, "spelling level loaded");
    }

    fn check_answer(&mut self) {
        let correct = self.answer().to_lowercase() == self.level().word.to_lowercase();
        self.status = if correct {
            SpellingStatus::Correct
        } else {
            SpellingStatus::Incorrect
        };
        tracing::debug!(level = self.level_index, correct, "spelling checked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Concept;

    fn game_for(words: &[&str]) -> SpellingGame {
        let concepts = ConceptList::new(
            words
                .iter()
                .map(|w| Concept::new(w.to_lowercase(), *w, format!("{}.png", w)))
                .collect(),
        )
        .unwrap();
        SpellingGame::new(&concepts, GameRng::new(11))
    }

    fn tile_for(game: &SpellingGame, letter: char) -> usize {
        game.tiles()
            .iter()
            .position(|t| !t.chosen && t.letter.to_ascii_lowercase() == letter)
            .unwrap()
    }

    fn spell(game: &mut SpellingGame, word: &str) {
        for letter in word.chars() {
            let tile = tile_for(game, letter);
            game.select_letter(tile);
        }
    }

    #[test]
    fn test_tiles_are_the_word_letters() {
        let game = SpellingGame::new(&ConceptList::builtin(), GameRng::new(1));

        let mut letters: Vec<char> = game.tiles().iter().map(|t| t.letter).collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['A', 'e', 'l', 'p', 'p']);
        assert_eq!(game.slots(), vec![None; 5]);
        assert_eq!(game.level().hint.as_deref(), Some("A sweet fruit, often red or green"));
    }

    #[test]
    fn test_correct_answer_is_case_insensitive() {
        let mut game = game_for(&["Sun"]);
        spell(&mut game, "sun");

        assert_eq!(game.status(), SpellingStatus::Correct);
        assert!(game.all_letters_chosen());
        assert_eq!(game.answer(), "Sun");
    }

    #[test]
    fn test_wrong_order_is_incorrect() {
        let mut game = game_for(&["car"]);
        spell(&mut game, "rac");

        assert_eq!(game.status(), SpellingStatus::Incorrect);
        assert_eq!(game.answer(), "rac");
        assert!(!game.select_letter(0));
    }

    #[test]
    fn test_remove_letter_resumes_play() {
        let mut game = game_for(&["car"]);
        spell(&mut game, "rac");

        assert!(game.remove_letter(0));
        assert!(game.remove_letter(2));
        assert_eq!(game.status(), SpellingStatus::Playing);
        assert_eq!(game.slots(), vec![None, Some('a'), None]);

        spell(&mut game, "cr");
        assert_eq!(game.answer(), "car");
        assert_eq!(game.status(), SpellingStatus::Correct);
    }

    #[test]
    fn test_remove_from_empty_slot_ignored() {
        let mut game = game_for(&["tree"]);
        assert!(!game.remove_letter(0));
        assert!(!game.remove_letter(10));
    }

    #[test]
    fn test_chosen_tile_cannot_be_reused() {
        let mut game = game_for(&["tree"]);
        let tile = tile_for(&game, 't');

        assert!(game.select_letter(tile));
        assert!(!game.select_letter(tile));
        assert!(!game.select_letter(99));
        assert_eq!(game.answer(), "t");
    }

    #[test]
    fn test_repeated_letters_return_their_own_tile() {
        let mut game = game_for(&["tree"]);
        spell(&mut game, "te");
        let placed = game.tiles().iter().filter(|t| t.chosen).count();

        game.remove_letter(1);
        assert_eq!(game.tiles().iter().filter(|t| t.chosen).count(), placed - 1);
        assert!(game.tiles().iter().any(|t| t.letter == 'e' && !t.chosen));
    }

    #[test]
    fn test_correct_answer_is_locked() {
        let mut game = game_for(&["sun"]);
        spell(&mut game, "sun");
        assert!(!game.remove_letter(0));
    }

    #[test]
    fn test_levels_advance_then_finish() {
        let mut game = game_for(&["sun", "car"]);
        spell(&mut game, "sun");
        game.next_level();
        assert_eq!(game.level_index(), 1);
        assert_eq!(game.level().word, "car");
        assert_eq!(game.status(), SpellingStatus::Playing);

        game.next_level();
        assert_eq!(game.status(), SpellingStatus::Finished);
        assert_eq!(game.level_index(), 1);

        game.restart();
        assert_eq!(game.level_index(), 0);
        assert_eq!(game.status(), SpellingStatus::Playing);
    }

    #[test]
    fn test_retry_clears_answer() {
        let mut game = game_for(&["book"]);
        spell(&mut game, "kobo");
        assert_eq!(game.status(), SpellingStatus::Incorrect);

        game.retry_level();
        assert_eq!(game.status(), SpellingStatus::Playing);
        assert!(game.answer().is_empty());
        assert!(!game.all_letters_chosen());
    }
}
