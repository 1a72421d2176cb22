//! Memory-pair game session.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --restart--> Playing --(time up | all matched)--> Over
//!                      ^                                   |
//!                      +--------------restart--------------+
//! ```
//!
//! ## Timing
//!
//! Four timers drive a session, all on the session's scheduler:
//! - the countdown, one `Tick` per interval while playing
//! - `Evaluate`, fired after the reveal delay once two cards are up
//! - `Unflip`, fired after the mismatch delay for a wrong pair
//! - `ClearNotification`, taking down a power/combo banner
//!
//! ## Example
//!
//! ```
//! use word_memory::session::{SessionBuilder, Status};
//!
//! let mut session = SessionBuilder::new().seed(3).build().unwrap();
//! session.restart();
//!
//! // Flip the two cards of the first concept.
//! let pair: Vec<_> = session
//!     .cards()
//!     .iter()
//!     .filter(|c| c.pair_key == "apple")
//!     .map(|c| c.id)
//!     .collect();
//! assert!(session.flip(pair[0]));
//! assert!(session.flip(pair[1]));
//! assert!(session.is_evaluating());
//!
//! session.advance(600);
//! assert_eq!(session.score(), 10);
//! assert_eq!(session.combo(), 1);
//! assert_eq!(session.status(), Status::Playing);
//! ```

mod builder;
mod event;
mod state;
mod view;

pub use builder::SessionBuilder;
pub use event::{GameOverReason, Notification, SessionEvent, TimerEvent};
pub use state::Session;
pub use view::{SessionView, Status};
