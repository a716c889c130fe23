//! Process table loader.
//!
//! The input is whitespace separated, four fields per process:
//! `pid basePriority arrivalTime burstTime`. Newlines and runs of spaces
//! are interchangeable, so one-record-per-line and all-on-one-line files
//! parse the same way. N is simply the number of complete records.
//!
//! Only field syntax is validated. Semantically odd tables (duplicate pids,
//! zero bursts) load fine and simulate as given.

use sched_core::{ProcessId, ProcessSpec};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Loader error types
#[derive(Debug, Error, PartialEq)]
pub enum LoaderError {
    #[error("Failed to read process table: {0}")]
    Io(String),

    #[error("Record {record}: invalid {field} '{token}'")]
    InvalidField {
        record: usize,
        field: &'static str,
        token: String,
    },

    #[error("Record {record} is incomplete: expected 4 fields, got {found}")]
    IncompleteRecord { record: usize, found: usize },
}

/// Reads and parses the process table at `path`.
pub fn load_specs(path: impl AsRef<Path>) -> Result<Vec<ProcessSpec>, LoaderError> {
    let text =
        fs::read_to_string(path.as_ref()).map_err(|err| LoaderError::Io(err.to_string()))?;
    parse_specs(&text)
}

/// Parses a process table from text.
pub fn parse_specs(text: &str) -> Result<Vec<ProcessSpec>, LoaderError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut specs = Vec::with_capacity(tokens.len() / 4);

    for (index, record) in tokens.chunks(4).enumerate() {
        let number = index + 1;
        if record.len() < 4 {
            return Err(LoaderError::IncompleteRecord {
                record: number,
                found: record.len(),
            });
        }
        specs.push(ProcessSpec {
            pid: ProcessId::new(parse_field(record[0], number, "pid")?),
            base_priority: parse_field(record[1], number, "priority")?,
            arrival_time: parse_field(record[2], number, "arrival time")?,
            burst_time: parse_field(record[3], number, "burst time")?,
        });
    }

    Ok(specs)
}

fn parse_field<T: std::str::FromStr>(
    token: &str,
    record: usize,
    field: &'static str,
) -> Result<T, LoaderError> {
    token.parse().map_err(|_| LoaderError::InvalidField {
        record,
        field,
        token: token.to_string(),
    })
}
