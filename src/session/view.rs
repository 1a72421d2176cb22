//! Read-only snapshot handed to the rendering layer.

use serde::{Deserialize, Serialize};

use super::event::Notification;
use crate::cards::Card;

/// Session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Built but never started.
    #[default]
    Idle,
    /// Countdown running, cards accept flips.
    Playing,
    /// Time ran out or every pair was found. Only `restart` leaves this state.
    Over,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView<'a> {
    pub status: Status,
    /// Cards in table order with their current flags.
    pub cards: &'a [Card],
    pub score: u32,
    pub combo: u32,
    pub time_remaining: u32,
    pub high_score: u32,
    pub notification: Option<Notification>,
    pub evaluating: bool,
    pub game_over: bool,
}

impl SessionView<'_> {
    /// Number of pairs already found.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }
}
