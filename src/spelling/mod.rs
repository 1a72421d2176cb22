//! Fill-in-the-blank spelling.
//!
//! Each level shows a clue and a picture next to the word's letters in
//! scrambled order; the player places letters into the answer slots. The
//! answer is checked, ignoring case, as soon as the last slot fills.

mod puzzle;

pub use puzzle::{LetterTile, SpellingGame, SpellingLevel, SpellingStatus};
