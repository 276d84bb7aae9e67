//! Cooperative timer queue
//!
//! One [`TimerQueue`] is shared by the whole application. Delayed work
//! (sequence playback steps, turning a flashed light back off) is scheduled
//! as a value of the caller's action type and handed back by
//! [`TimerQueue::pop_due`] once its deadline has passed. Nothing runs on a
//! background thread; the event loop polls the queue on every tick.

use std::time::{Duration, Instant};

/// Handle for a scheduled action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Scheduled<A> {
    id: TimerId,
    due: Instant,
    action: A,
}

#[derive(Debug)]
pub struct TimerQueue<A> {
    next_id: u64,
    // Kept sorted by (due, id); queues here hold a handful of entries
    entries: Vec<Scheduled<A>>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `action` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) -> TimerId {
        self.schedule_at(now + delay, action)
    }

    /// Schedule `action` to fire at `due`
    pub fn schedule_at(&mut self, due: Instant, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let slot = self
            .entries
            .partition_point(|e| (e.due, e.id) <= (due, id));
        self.entries.insert(slot, Scheduled { id, due, action });
        id
    }

    /// Cancel a pending action. Cancelling an id that already fired or was
    /// already cancelled is a no-op returning `None`.
    pub fn cancel(&mut self, id: TimerId) -> Option<A> {
        let slot = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(slot).action)
    }

    /// Cancel every pending action matching `predicate`, in firing order
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&A) -> bool) -> Vec<A> {
        let mut cancelled = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if predicate(&entry.action) {
                cancelled.push(entry.action);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;
        cancelled
    }

    /// Remove and return every action due at or before `now`, earliest first
    pub fn pop_due(&mut self, now: Instant) -> Vec<A> {
        let split = self.entries.partition_point(|e| e.due <= now);
        self.entries.drain(..split).map(|e| e.action).collect()
    }

    /// Remove and return the earliest action due at or before `now`,
    /// together with its deadline
    pub fn pop_next_due(&mut self, now: Instant) -> Option<(Instant, A)> {
        if self.entries.first()?.due > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.due, entry.action))
    }

    /// Whether any pending action matches `predicate`
    pub fn any(&self, mut predicate: impl FnMut(&A) -> bool) -> bool {
        self.entries.iter().any(|e| predicate(&e.action))
    }

    /// Deadline of the earliest pending action
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.first().map(|e| e.due)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
