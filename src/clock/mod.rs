//! Timer scheduling.
//!
//! The session never sleeps or spawns threads. Every delayed behavior (the
//! countdown, the reveal before judging a pair, the mismatch flash, the
//! notification timeout) is an event placed on a `Scheduler`. The host moves
//! time forward and the session dispatches whatever came due.
//!
//! ## Example Usage
//!
//! ```
//! use word_memory::clock::{Scheduler, VirtualClock};
//!
//! let mut clock = VirtualClock::new();
//! let handle = clock.schedule(600, "evaluate");
//! clock.schedule_repeating(1000, "tick");
//!
//! assert_eq!(clock.pop_due(1000).map(|(_, e)| e), Some("evaluate"));
//! assert_eq!(clock.now(), 600);
//! assert_eq!(clock.pop_due(1000).map(|(_, e)| e), Some("tick"));
//! assert_eq!(clock.pop_due(1000), None);
//!
//! // Cancelling an already-fired one-shot is a no-op.
//! assert!(!clock.cancel(handle));
//! ```

mod virtual_clock;

pub use virtual_clock::VirtualClock;

use serde::{Deserialize, Serialize};

/// Identifies a scheduled timer so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    /// Create a new timer handle.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Trait for timer schedulers.
///
/// Times are milliseconds on the scheduler's own clock. Events come back out
/// of `pop_due` in due-time order; events due at the same instant come out in
/// the order they were scheduled.
pub trait Scheduler<E> {
    /// Current time in milliseconds.
    fn now(&self) -> u64;

    /// Schedule `event` once, `delay_ms` from now.
    fn schedule(&mut self, delay_ms: u64, event: E) -> TimerHandle;

    /// Schedule `event` every `interval_ms`, first firing one interval from now.
    fn schedule_repeating(&mut self, interval_ms: u64, event: E) -> TimerHandle;

    /// Cancel a timer. Returns false if it was not pending.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Cancel every pending timer.
    fn cancel_all(&mut self);

    /// Check if a timer is still pending.
    fn is_pending(&self, handle: TimerHandle) -> bool;

    /// Number of pending timers.
    fn pending_count(&self) -> usize;

    /// Take the next event due at or before `deadline`.
    ///
    /// Moves the clock to the event's due time. When nothing is due, moves
    /// the clock to `deadline` and returns `None`.
    fn pop_due(&mut self, deadline: u64) -> Option<(TimerHandle, E)>;
}
