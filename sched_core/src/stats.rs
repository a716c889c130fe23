//! Timing statistics: per-run counters, the finalized summary, and
//! per-process metric snapshots.

use crate::process::{ProcessId, ProcessRecord};
use serde::{Deserialize, Serialize};

/// Running counters accumulated while a run executes.
#[derive(Debug, Clone, Default)]
pub struct StatsCollector {
    waiting_sum: u64,
    response_sum: u64,
    turnaround_sum: u64,
    idle_ticks: u64,
    busy_ticks: u64,
    completed: usize,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts a tick during which a process executed.
    pub fn on_busy_tick(&mut self) {
        self.busy_ticks += 1;
    }

    /// Accounts a tick during which nothing executed.
    pub fn on_idle_tick(&mut self) {
        self.idle_ticks += 1;
    }

    /// Banks the final timing values of one completed process.
    pub fn on_completion(&mut self, waiting: u64, response: u64, turnaround: u64) {
        self.waiting_sum += waiting;
        self.response_sum += response;
        self.turnaround_sum += turnaround;
        self.completed += 1;
    }

    pub fn idle_ticks(&self) -> u64 {
        self.idle_ticks
    }

    pub fn busy_ticks(&self) -> u64 {
        self.busy_ticks
    }

    /// Computes averages and CPU usage for the finished run.
    ///
    /// `total_ticks` is the tick at which the final completion was observed.
    /// Empty runs finalize to all zeros rather than dividing by zero.
    pub fn finalize(&self, total_ticks: u64) -> RunSummary {
        let cpu_usage = if total_ticks == 0 {
            0.0
        } else {
            (total_ticks - self.idle_ticks) as f64 / total_ticks as f64 * 100.0
        };
        let average = |sum: u64| {
            if self.completed == 0 {
                0.0
            } else {
                sum as f64 / self.completed as f64
            }
        };
        RunSummary {
            total_ticks,
            idle_ticks: self.idle_ticks,
            busy_ticks: self.busy_ticks,
            cpu_usage,
            avg_waiting: average(self.waiting_sum),
            avg_response: average(self.response_sum),
            avg_turnaround: average(self.turnaround_sum),
        }
    }
}

/// Aggregate results of one discipline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_ticks: u64,
    pub idle_ticks: u64,
    pub busy_ticks: u64,
    /// `(total_ticks - idle_ticks) / total_ticks * 100`.
    pub cpu_usage: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
    pub avg_turnaround: f64,
}

/// Per-process timing snapshot taken after a run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: ProcessId,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub waiting_time: u64,
    pub response_time: u64,
    pub turnaround_time: u64,
    pub completion_time: u64,
}

impl ProcessMetrics {
    pub fn from_record(record: &ProcessRecord) -> Self {
        Self {
            pid: record.pid,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            waiting_time: record.waiting_time,
            response_time: record.response_time.unwrap_or_default(),
            turnaround_time: record.turnaround_time,
            completion_time: record.completion_time.unwrap_or_default(),
        }
    }
}
