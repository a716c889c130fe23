//! Process identity, input specs, and per-run simulation records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a process in a [`ProcessTable`].
///
/// Queues and the engine address processes by slot; the slot of a process is
/// its position in the input file and never changes during a run.
pub type Slot = usize;

/// Process identifier as given in the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessId(u32);

impl ProcessId {
    /// Creates a process id from its raw input value.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable input row: the static description of a process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: ProcessId,
    /// Static priority; higher values are more urgent.
    pub base_priority: f64,
    /// Tick at which the process becomes available for admission.
    pub arrival_time: u64,
    /// Total ticks of CPU time the process needs.
    pub burst_time: u64,
}

/// Mutable per-process state for one discipline run.
///
/// Records are rebuilt from the specs for every run, so disciplines never
/// observe each other's leftovers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: ProcessId,
    pub base_priority: f64,
    pub arrival_time: u64,
    pub burst_time: u64,
    /// `base_priority + alpha * ticks_waited`, recomputed while waiting.
    pub dynamic_priority: f64,
    /// Ticks of work left; decremented once per executed tick.
    pub remaining_time: u64,
    /// Ticks spent in the ready queue without running (aging counter).
    pub ticks_waited: u64,
    /// Set exactly once, on the first executed tick, to
    /// `first_execution_tick - arrival_time`.
    pub response_time: Option<u64>,
    /// Filled at completion: `completion - arrival - burst`.
    pub waiting_time: u64,
    /// Filled at completion: `completion - arrival`.
    pub turnaround_time: u64,
    /// Tick at which completion was observed.
    pub completion_time: Option<u64>,
}

impl ProcessRecord {
    /// Creates a fresh record with all derived state at initial values.
    pub fn new(spec: &ProcessSpec) -> Self {
        Self {
            pid: spec.pid,
            base_priority: spec.base_priority,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            dynamic_priority: spec.base_priority,
            remaining_time: spec.burst_time,
            ticks_waited: 0,
            response_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            completion_time: None,
        }
    }

    /// Accounts one waited tick and recomputes the dynamic priority.
    pub fn age(&mut self, alpha: f64) {
        self.ticks_waited += 1;
        self.dynamic_priority = self.base_priority + alpha * self.ticks_waited as f64;
    }
}

/// Slot-addressed store of all process records for one run.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
}

impl ProcessTable {
    /// Builds a table with one fresh record per spec, in input order.
    pub fn from_specs(specs: &[ProcessSpec]) -> Self {
        Self {
            records: specs.iter().map(ProcessRecord::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    pub fn record(&self, slot: Slot) -> &ProcessRecord {
        &self.records[slot]
    }

    /// Returns the record at `slot` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    pub fn record_mut(&mut self, slot: Slot) -> &mut ProcessRecord {
        &mut self.records[slot]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.records.iter()
    }

    /// Slots ordered by arrival time; ties keep input order.
    pub fn slots_by_arrival(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = (0..self.records.len()).collect();
        slots.sort_by_key(|&slot| self.records[slot].arrival_time);
        slots
    }
}
