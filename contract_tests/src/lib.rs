//! # Output Contract Tests
//!
//! This crate provides "golden" tests for the simulator's output contracts
//! to ensure they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Output contracts are written as code
//! - **Testability first**: Contract tests fail when the output changes
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each contract area has a module with tests that verify:
//! - Trace line shapes
//! - Report layout, separators, and spacing
//! - Serialized run structures
//! - Cross-discipline scheduling properties

pub mod trace_lines;
pub mod report_format;
pub mod event_schema;
pub mod scheduling_properties;

/// Common test helpers for contract validation
pub mod test_helpers {
    use sched_core::{DisciplineRun, ProcessId, ProcessSpec, ProcessTable, TickEngine};

    /// Quantum every reference run uses.
    pub const REFERENCE_QUANTUM: u64 = 2;

    /// Aging factor every reference run uses.
    pub const REFERENCE_ALPHA: f64 = 0.5;

    /// Builds one input row the way the loader would.
    pub fn spec(pid: u32, priority: f64, arrival: u64, burst: u64) -> ProcessSpec {
        ProcessSpec {
            pid: ProcessId::new(pid),
            base_priority: priority,
            arrival_time: arrival,
            burst_time: burst,
        }
    }

    /// The reference workload: three processes with equal base priorities
    /// and staggered arrivals. Every golden section in this crate was
    /// computed over this table.
    pub fn reference_specs() -> Vec<ProcessSpec> {
        vec![spec(1, 1.0, 0, 4), spec(2, 1.0, 1, 3), spec(3, 1.0, 2, 2)]
    }

    pub fn fcfs_run(specs: &[ProcessSpec]) -> DisciplineRun {
        TickEngine::fcfs(ProcessTable::from_specs(specs)).run()
    }

    pub fn round_robin_run(specs: &[ProcessSpec], quantum: u64) -> DisciplineRun {
        TickEngine::round_robin(ProcessTable::from_specs(specs), quantum).run()
    }

    pub fn priority_run(specs: &[ProcessSpec], alpha: f64) -> DisciplineRun {
        TickEngine::priority_aging(ProcessTable::from_specs(specs), alpha).run()
    }

    /// All three reference runs, in report order.
    pub fn reference_runs() -> Vec<DisciplineRun> {
        let specs = reference_specs();
        vec![
            fcfs_run(&specs),
            round_robin_run(&specs, REFERENCE_QUANTUM),
            priority_run(&specs, REFERENCE_ALPHA),
        ]
    }

    /// Completion tick of `pid` within a finished run.
    pub fn completion_of(run: &DisciplineRun, pid: u32) -> u64 {
        run.processes
            .iter()
            .find(|process| process.pid == ProcessId::new(pid))
            .map(|process| process.completion_time)
            .expect("process missing from run")
    }
}
