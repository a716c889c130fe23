//! # Sched Core
//!
//! Deterministic tick-by-tick simulation of CPU scheduling disciplines over
//! a fixed batch of processes.
//!
//! ## Philosophy
//!
//! - **One engine, three policies**: admission, execution, retirement, and
//!   statistics are shared; FCFS, round-robin, and priority-with-aging only
//!   decide queue order and preemption.
//! - **Determinism first**: no clocks, no randomness, no threads. The same
//!   input always produces the same trace.
//! - **Everything on the record**: runs yield an event log plus summary
//!   values, never side effects. Rendering and I/O live elsewhere.
//!
//! ## Non-Goals
//!
//! - Multi-CPU scheduling, I/O bursts, or dynamic process creation.
//! - Real wall-clock time; a tick is purely simulated.

pub mod engine;
pub mod event;
pub mod fcfs;
pub mod policy;
pub mod priority;
pub mod process;
pub mod queue;
pub mod round_robin;
pub mod stats;

pub use engine::{DisciplineRun, TickEngine};
pub use event::TraceEvent;
pub use fcfs::Fcfs;
pub use policy::{Discipline, DisciplineKind, PolicyContext};
pub use priority::PriorityAging;
pub use process::{ProcessId, ProcessRecord, ProcessSpec, ProcessTable, Slot};
pub use queue::ProcessQueue;
pub use round_robin::RoundRobin;
pub use stats::{ProcessMetrics, RunSummary, StatsCollector};
