//! Scheduling behavior contract tests
//!
//! Cross-discipline guarantees: identities that hold for every run, plus
//! the preemption rules that distinguish the disciplines from each other.

use crate::test_helpers::*;
use sched_core::{DisciplineRun, TraceEvent};

/// Longest uninterrupted stretch of ticks one process held the CPU.
pub fn longest_stint(run: &DisciplineRun) -> u64 {
    let mut last_pid = None;
    let mut streak = 0;
    let mut longest = 0;
    for event in &run.events {
        if let TraceEvent::Running { pid, .. } = event {
            if Some(*pid) == last_pid {
                streak += 1;
            } else {
                last_pid = Some(*pid);
                streak = 1;
            }
            longest = longest.max(streak);
        }
    }
    longest
}

/// Pids in the order their completions were observed.
pub fn finish_order(run: &DisciplineRun) -> Vec<u32> {
    run.events
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Finished { pid, .. } => Some(pid.as_u32()),
            _ => None,
        })
        .collect()
}
