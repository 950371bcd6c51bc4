//! Virtual-time scheduler for delayed state transitions.
//!
//! Every timed behaviour on the page (toast entrance and exit, portfolio
//! fades, the simulated contact send) is an event scheduled on a
//! [`Scheduler`]. Time only moves when the owner advances it, so tests drive
//! the clock directly and the web app advances it from a single timer loop.
//!
//! ```text
//! schedule_after(100ms, Show)      now = 0
//! schedule_after(5000ms, Hide)
//! advance(150ms)  -> [Show]        now = 150
//! advance(5000ms) -> [Hide]        now = 5150
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Handle to a scheduled event, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// An event that came due during an advance.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<E> {
    pub id: TimerId,
    /// Virtual time the event was due at
    pub at: Duration,
    pub event: E,
}

#[derive(Debug)]
struct Scheduled<E> {
    due: Duration,
    id: TimerId,
    event: E,
}

impl<E> PartialEq for Scheduled<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Scheduled<E> {}

impl<E> PartialOrd for Scheduled<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Scheduled<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour; ties fire in scheduling order
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Min-heap of events keyed on virtual due time.
#[derive(Debug)]
pub struct Scheduler<E> {
    queue: BinaryHeap<Scheduled<E>>,
    now: Duration,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            now: Duration::ZERO,
            next_id: 0,
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to fire `delay` after the current virtual time
    pub fn schedule_after(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.queue.push(Scheduled {
            due: self.now + delay,
            id,
            event,
        });

        id
    }

    /// Drop a pending event. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|task| task.id != id);
        self.queue.len() != before
    }

    /// Check if there are pending events
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of pending events
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Virtual time remaining until the next event is due
    pub fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .peek()
            .map(|task| task.due.saturating_sub(self.now))
    }

    /// Pop the earliest event due at or before `target`, moving the clock to
    /// its due time.
    ///
    /// Owners that schedule follow-up events while handling a fired one loop
    /// on this and finish with [`Scheduler::advance_to`], so follow-ups are
    /// timed from the moment their cause fired.
    pub fn pop_until(&mut self, target: Duration) -> Option<Fired<E>> {
        if self.queue.peek()?.due > target {
            return None;
        }
        let task = self.queue.pop()?;
        self.now = self.now.max(task.due);
        Some(Fired {
            id: task.id,
            at: task.due,
            event: task.event,
        })
    }

    /// Move the clock forward to `target` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }

    /// Advance the clock by `by`, returning every event that came due in
    /// due-time order.
    pub fn advance(&mut self, by: Duration) -> Vec<Fired<E>> {
        let target = self.now + by;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_until(target) {
            fired.push(event);
        }
        self.advance_to(target);
        fired
    }
}
