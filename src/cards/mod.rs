//! Card system: concepts, card instances, and the deck.
//!
//! ## Key Types
//!
//! - `Concept`: static content for one pair (word, image, definition, power)
//! - `ConceptList`: validated concept data; never empty, keys unique
//! - `Card`: a face on the table with its transient flags
//! - `Deck`: builds paired cards from concepts and deals them shuffled

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::Deck;
pub use definition::{Concept, ConceptList};
pub use instance::{Card, CardId, CardKind};
