//! Trace events recorded by the tick engine.
//!
//! The engine appends one event per notable occurrence; the resulting log is
//! the authoritative record of a run. Used in tests to verify scheduling
//! behavior, and rendered line by line into the report via `Display`.

use crate::process::ProcessId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the execution trace.
///
/// `Running` and `Finished` carry the dynamic priority only under the
/// priority discipline; elsewhere the annotation is `None` and the rendered
/// line has no priority suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// Process moved from the arrival queue to the ready queue.
    Arrival { tick: u64, pid: ProcessId },
    /// Process held the CPU for this tick.
    Running {
        tick: u64,
        pid: ProcessId,
        priority: Option<f64>,
    },
    /// The executing process changed; always directly precedes a `Running`.
    ContextSwitch,
    /// Completion observed: the process executed its last unit the tick
    /// before.
    Finished {
        tick: u64,
        pid: ProcessId,
        priority: Option<f64>,
    },
    /// No ready process this tick.
    Idle { tick: u64 },
    /// The last process completed; the run stops at this tick.
    AllFinished { tick: u64 },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Arrival { tick, pid } => {
                write!(f, "<time {tick}> [new arrival] process {pid}")
            }
            TraceEvent::Running {
                tick,
                pid,
                priority,
            } => {
                write!(f, "<time {tick}> process {pid} is running")?;
                if let Some(priority) = priority {
                    write!(f, "[priority {priority:.2}]")?;
                }
                Ok(())
            }
            TraceEvent::ContextSwitch => {
                write!(f, "------------------------------ (Context-Switch)")
            }
            TraceEvent::Finished {
                tick,
                pid,
                priority,
            } => {
                write!(f, "<time {tick}> process {pid} is finished")?;
                if let Some(priority) = priority {
                    write!(f, "[priority {priority:.2}]")?;
                }
                Ok(())
            }
            TraceEvent::Idle { tick } => {
                write!(f, "<time {tick}> ---- system is idle ----")
            }
            TraceEvent::AllFinished { tick } => {
                write!(f, "<time {tick}> all processes finish")
            }
        }
    }
}
