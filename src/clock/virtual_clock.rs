//! Virtual-time scheduler.
//!
//! Time only moves when the host says so, which makes every timer boundary
//! reproducible in tests and lets a host map any real clock (animation
//! frames, an interval timer, a game loop) onto the session.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use super::{Scheduler, TimerHandle};

/// A pending timer.
#[derive(Clone, Debug)]
struct TimerEntry<E> {
    event: E,
    /// Re-arm interval for repeating timers.
    interval: Option<u64>,
    /// Due time of the live heap slot; stale slots are skipped.
    due: u64,
}

/// Scheduler driven by explicit time advancement.
#[derive(Clone, Debug)]
pub struct VirtualClock<E> {
    now: u64,

    /// Min-heap of (due, sequence, handle). Cancelled entries stay in the
    /// heap and are discarded when they reach the top.
    queue: BinaryHeap<Reverse<(u64, u64, TimerHandle)>>,

    timers: FxHashMap<TimerHandle, TimerEntry<E>>,

    next_handle: u64,
    next_sequence: u64,
}

impl<E> Default for VirtualClock<E> {
    fn default() -> Self {
        Self {
            now: 0,
            queue: BinaryHeap::new(),
            timers: FxHashMap::default(),
            next_handle: 1,
            next_sequence: 0,
        }
    }
}

impl<E> VirtualClock<E> {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_handle(&mut self) -> TimerHandle {
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn push_slot(&mut self, due: u64, handle: TimerHandle) {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(Reverse((due, seq, handle)));
    }

    fn insert(&mut self, delay_ms: u64, event: E, interval: Option<u64>) -> TimerHandle {
        let handle = self.alloc_handle();
        let due = self.now.saturating_add(delay_ms);
        self.timers.insert(handle, TimerEntry { event, interval, due });
        self.push_slot(due, handle);
        handle
    }
}

impl<E: Clone> Scheduler<E> for VirtualClock<E> {
    fn now(&self) -> u64 {
        self.now
    }

    fn schedule(&mut self, delay_ms: u64, event: E) -> TimerHandle {
        self.insert(delay_ms, event, None)
    }

    fn schedule_repeating(&mut self, interval_ms: u64, event: E) -> TimerHandle {
        // A zero interval would fire forever within one deadline.
        let interval_ms = interval_ms.max(1);
        self.insert(interval_ms, event, Some(interval_ms))
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle).is_some()
    }

    fn cancel_all(&mut self) {
        self.timers.clear();
        self.queue.clear();
    }

    fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    fn pending_count(&self) -> usize {
        self.timers.len()
    }

    fn pop_due(&mut self, deadline: u64) -> Option<(TimerHandle, E)> {
        while let Some(&Reverse((due, _, handle))) = self.queue.peek() {
            if due > deadline {
                break;
            }
            self.queue.pop();

            let Some(entry) = self.timers.get(&handle) else {
                continue;
            };
            if entry.due != due {
                continue;
            }

            let (event, interval) = (entry.event.clone(), entry.interval);
            self.now = self.now.max(due);
            match interval {
                Some(interval) => {
                    let next_due = due.saturating_add(interval);
                    if let Some(entry) = self.timers.get_mut(&handle) {
                        entry.due = next_due;
                    }
                    self.push_slot(next_due, handle);
                }
                None => {
                    self.timers.remove(&handle);
                }
            }
            return Some((handle, event));
        }

        self.now = self.now.max(deadline);
        None
    }
}
