//! Word-to-picture matching.
//!
//! A calmer companion to the memory game: every word and every picture is
//! face up, the player links each word to a picture, and the board is graded
//! in one go at [`POINTS_PER_PAIR`] per correct link.

mod board;

pub use board::{
    ImageTile, ItemId, MatchPhase, MatchReport, WordMatchGame, WordTile, POINTS_PER_PAIR,
};
