//! Sequential discipline runs and report production.
//!
//! Discipline order is fixed: FCFS, round-robin, priority with aging. Each
//! run rebuilds its process table from the raw specs, so nothing leaks from
//! one discipline into the next.

use crate::config::{ConfigError, SimConfig};
use crate::loader::{self, LoaderError};
use sched_core::{DisciplineRun, ProcessSpec, ProcessTable, TickEngine};
use sched_report::render_report;
use std::fs;
use thiserror::Error;

/// Simulator error types
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    #[error("Failed to write report to {path}: {message}")]
    Output { path: String, message: String },
}

/// Simulates every discipline over the same specs, in report order.
pub fn simulate(specs: &[ProcessSpec], quantum: u64, alpha: f64) -> Vec<DisciplineRun> {
    vec![
        TickEngine::fcfs(ProcessTable::from_specs(specs)).run(),
        TickEngine::round_robin(ProcessTable::from_specs(specs), quantum).run(),
        TickEngine::priority_aging(ProcessTable::from_specs(specs), alpha).run(),
    ]
}

/// Loads the process table, simulates every discipline, and writes the
/// rendered report to the configured output file.
pub fn execute(config: &SimConfig) -> Result<(), SimError> {
    let specs = loader::load_specs(&config.input_path)?;
    let runs = simulate(&specs, config.quantum, config.alpha);
    let report = render_report(&runs);
    fs::write(&config.output_path, report).map_err(|err| SimError::Output {
        path: config.output_path.display().to_string(),
        message: err.to_string(),
    })?;
    Ok(())
}
