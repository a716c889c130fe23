//! # SchedSim
//!
//! Command-line front end for the scheduling-discipline simulator.
//!
//! ## Philosophy
//!
//! - **Thin shell, thick core**: arguments, file I/O, and discipline order
//!   live here; every scheduling decision lives in `sched_core`.
//! - **Validate before work**: bad arguments fail with a usage message
//!   before the input file is even opened.
//! - **Deterministic output**: the same input file and parameters produce a
//!   byte-identical report.
//!
//! ## Responsibilities
//!
//! The binary:
//! - Parses and validates the four positional arguments
//! - Loads the whitespace-separated process table
//! - Runs FCFS, round-robin, and priority-with-aging over it, in that order
//! - Writes the rendered report to the output file
//!
//! ## Non-Responsibilities
//!
//! The binary does NOT:
//! - Make scheduling decisions (`sched_core` owns the engine and policies)
//! - Define the report layout (`sched_report` owns every byte of it)
//! - Guard against semantically odd tables (duplicate pids, zero bursts):
//!   such input loads fine and simulates as given

pub mod config;
pub mod loader;
pub mod runner;

pub use config::{parse_args, print_usage, ConfigError, SimConfig};
pub use loader::{load_specs, parse_specs, LoaderError};
pub use runner::{execute, simulate, SimError};
