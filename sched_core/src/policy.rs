//! The discipline seam: what varies between FCFS, round-robin, and priority
//! scheduling.
//!
//! The tick engine owns admission, execution, retirement, statistics, and
//! the trace; a [`Discipline`] only decides ordering and preemption. All
//! hooks operate on the ready queue in place, so the queue head is always
//! the process about to run.

use crate::process::{ProcessTable, Slot};
use crate::queue::ProcessQueue;
use serde::{Deserialize, Serialize};

/// Which scheduling discipline a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisciplineKind {
    Fcfs,
    RoundRobin,
    PriorityAging,
}

impl DisciplineKind {
    /// Title used in the report section header.
    pub fn title(&self) -> &'static str {
        match self {
            DisciplineKind::Fcfs => "FCFS",
            DisciplineKind::RoundRobin => "RR",
            DisciplineKind::PriorityAging => "Preemptive Priority Scheduling with Aging",
        }
    }
}

/// Mutable view of one run handed to the active discipline.
pub struct PolicyContext<'a> {
    /// Current simulated time.
    pub tick: u64,
    pub table: &'a mut ProcessTable,
    pub ready: &'a mut ProcessQueue,
    /// Consecutive ticks the current runner has held the CPU; reset by the
    /// engine on every change of runner.
    pub stint_ticks: u64,
}

/// A scheduling discipline plugged into the tick engine.
pub trait Discipline {
    fn kind(&self) -> DisciplineKind;

    /// Called at the top of every tick, before admissions. Aging happens
    /// here.
    fn before_admission(&mut self, _ctx: &mut PolicyContext<'_>) {}

    /// Called once per admitted process, after it was enqueued at the
    /// ready-queue tail. Admissions within a tick invoke this in arrival
    /// order, so preemption checks compose incrementally.
    fn on_admit(&mut self, _ctx: &mut PolicyContext<'_>, _slot: Slot) {}

    /// Chooses the process that executes this tick. `head` is the current
    /// queue head and still has remaining work. Implementations may reorder
    /// the queue; the returned slot must end up at the head.
    fn select_runner(&mut self, ctx: &mut PolicyContext<'_>, head: Slot) -> Slot;

    /// Chooses the next runner right after a completion; the finished
    /// process has already been removed from the queue.
    fn select_successor(&mut self, ctx: &mut PolicyContext<'_>) -> Option<Slot> {
        ctx.ready.head()
    }

    /// Whether trace lines under this discipline carry the dynamic priority.
    fn annotates_priority(&self) -> bool {
        false
    }
}
