//! Preemptive priority scheduling with linear aging.
//!
//! Higher `dynamic_priority` wins the CPU; every tick spent waiting raises a
//! process's priority by `alpha`, so nothing starves for alpha > 0. All
//! comparisons are strict, and the queue scan keeps the first of equals, so
//! ties resolve by queue order rather than by re-sorting.

use crate::policy::{Discipline, DisciplineKind, PolicyContext};
use crate::process::Slot;

/// Priority discipline with aging factor `alpha` in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct PriorityAging {
    alpha: f64,
}

impl PriorityAging {
    /// Creates a priority discipline. Callers validate the alpha range
    /// before construction.
    pub fn new(alpha: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&alpha));
        Self { alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Slot of the highest-priority process among the queue entries after
    /// skipping the first `skip`; the first of equals wins.
    fn best_waiting(ctx: &PolicyContext<'_>, skip: usize) -> Option<Slot> {
        let mut best: Option<(Slot, f64)> = None;
        for slot in ctx.ready.iter().skip(skip) {
            let priority = ctx.table.record(slot).dynamic_priority;
            let better = match best {
                Some((_, best_priority)) => priority > best_priority,
                None => true,
            };
            if better {
                best = Some((slot, priority));
            }
        }
        best.map(|(slot, _)| slot)
    }
}

impl Discipline for PriorityAging {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::PriorityAging
    }

    fn before_admission(&mut self, ctx: &mut PolicyContext<'_>) {
        // The head is the running process; everyone behind it waited this
        // tick.
        let waiting: Vec<Slot> = ctx.ready.iter().skip(1).collect();
        for slot in waiting {
            ctx.table.record_mut(slot).age(self.alpha);
        }
    }

    fn on_admit(&mut self, ctx: &mut PolicyContext<'_>, slot: Slot) {
        // Admission resets aging: the newcomer starts at its base priority.
        let record = ctx.table.record_mut(slot);
        record.dynamic_priority = record.base_priority;

        let head = match ctx.ready.head() {
            Some(head) if head != slot => head,
            _ => return,
        };
        // A head with no work left is retiring this tick; the completion
        // scan picks the next runner instead of an arrival-time preemption.
        if ctx.table.record(head).remaining_time == 0 {
            return;
        }
        if ctx.table.record(slot).dynamic_priority > ctx.table.record(head).dynamic_priority {
            ctx.ready.rotate_to_front(slot);
        }
    }

    fn select_runner(&mut self, ctx: &mut PolicyContext<'_>, head: Slot) -> Slot {
        let best = match Self::best_waiting(ctx, 1) {
            Some(best) => best,
            None => return head,
        };
        if ctx.table.record(best).dynamic_priority > ctx.table.record(head).dynamic_priority {
            ctx.ready.rotate_to_front(best);
            best
        } else {
            head
        }
    }

    fn select_successor(&mut self, ctx: &mut PolicyContext<'_>) -> Option<Slot> {
        let best = Self::best_waiting(ctx, 0)?;
        ctx.ready.rotate_to_front(best);
        Some(best)
    }

    fn annotates_priority(&self) -> bool {
        true
    }
}
