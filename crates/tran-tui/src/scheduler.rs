//! Timer queue for scheduled follow-up messages.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crate::messages::ReceiverMessage;

struct Entry {
    deadline: Instant,
    seq: u64,
    message: ReceiverMessage,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap pops the earliest deadline first,
    // insertion order breaking ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Messages waiting for their deadline.
#[derive(Default)]
pub struct Scheduler {
    queue: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `message` for delivery `after` from `now`.
    pub fn schedule_at(&mut self, now: Instant, after: Duration, message: ReceiverMessage) {
        let entry = Entry {
            deadline: now + after,
            seq: self.next_seq,
            message,
        };
        self.next_seq += 1;
        self.queue.push(entry);
    }

    /// Queue `message` for delivery `after` from now.
    pub fn schedule(&mut self, after: Duration, message: ReceiverMessage) {
        self.schedule_at(Instant::now(), after, message);
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.peek().map(|entry| entry.deadline)
    }

    /// Time until the earliest deadline, zero if already due.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Remove and return every message due at `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<ReceiverMessage> {
        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|entry| entry.deadline <= now) {
            if let Some(entry) = self.queue.pop() {
                due.push(entry.message);
            }
        }
        due
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
