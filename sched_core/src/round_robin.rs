//! Round-robin: fixed time quantum, preempt to the tail.

use crate::policy::{Discipline, DisciplineKind, PolicyContext};
use crate::process::Slot;

/// Round-robin discipline with a fixed quantum in ticks.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: u64,
}

impl RoundRobin {
    /// Creates a round-robin discipline. `quantum` must be at least 1;
    /// callers validate before construction.
    pub fn new(quantum: u64) -> Self {
        debug_assert!(quantum >= 1);
        Self { quantum }
    }

    pub fn quantum(&self) -> u64 {
        self.quantum
    }
}

impl Discipline for RoundRobin {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::RoundRobin
    }

    fn select_runner(&mut self, ctx: &mut PolicyContext<'_>, head: Slot) -> Slot {
        // Quantum exhausted while someone else waits: head goes to the tail.
        // A sole occupant keeps running past its quantum instead of switching
        // to itself.
        if ctx.stint_ticks >= self.quantum && ctx.ready.len() > 1 {
            if let Some(front) = ctx.ready.dequeue() {
                ctx.ready.enqueue(front);
            }
            return ctx.ready.head().unwrap_or(head);
        }
        head
    }
}
