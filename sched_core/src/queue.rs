//! FIFO process queue with rotation.
//!
//! One queue type serves both the arrival queue and the ready queue. It is a
//! plain `VecDeque` of table slots for deterministic ordering; rotation is
//! the only ordering primitive beyond enqueue/dequeue, so equal-priority
//! ties always resolve by queue position.

use crate::process::Slot;
use std::collections::VecDeque;

/// Ordered queue of process slots.
#[derive(Debug, Clone, Default)]
pub struct ProcessQueue {
    queue: VecDeque<Slot>,
}

impl ProcessQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends `slot` at the tail.
    pub fn enqueue(&mut self, slot: Slot) {
        self.queue.push_back(slot);
    }

    /// Removes and returns the head.
    pub fn dequeue(&mut self) -> Option<Slot> {
        self.queue.pop_front()
    }

    /// Returns the head without removing it.
    pub fn head(&self) -> Option<Slot> {
        self.queue.front().copied()
    }

    /// Removes `slot` wherever it sits in the queue.
    pub fn remove(&mut self, slot: Slot) {
        self.queue.retain(|&queued| queued != slot);
    }

    /// Rotates the queue until `slot` is the head.
    ///
    /// Elements popped from the head are pushed to the tail, so the cyclic
    /// order of everything else is preserved. Does nothing if `slot` is not
    /// in the queue.
    pub fn rotate_to_front(&mut self, slot: Slot) {
        if !self.contains(slot) {
            return;
        }
        while self.head() != Some(slot) {
            if let Some(front) = self.queue.pop_front() {
                self.queue.push_back(front);
            }
        }
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.queue.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Iterates slots from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = Slot> + '_ {
        self.queue.iter().copied()
    }
}
