//! First-come-first-served: the head runs to completion, nothing preempts.

use crate::policy::{Discipline, DisciplineKind, PolicyContext};
use crate::process::Slot;

/// FCFS discipline. Stateless: queue order alone decides everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Self
    }
}

impl Discipline for Fcfs {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Fcfs
    }

    fn select_runner(&mut self, _ctx: &mut PolicyContext<'_>, head: Slot) -> Slot {
        head
    }
}
