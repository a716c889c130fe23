//! Command-line configuration and validation.
//!
//! The simulator takes exactly four positional arguments: input path,
//! output path, round-robin quantum, and priority aging factor. Range
//! checks happen here, before any file is touched.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Expected 4 arguments, got {0}")]
    WrongArgumentCount(usize),

    #[error("Invalid quantum '{0}': not a whole number")]
    InvalidQuantum(String),

    #[error("Quantum must be a positive integer, got {0}")]
    QuantumTooSmall(u64),

    #[error("Invalid alpha '{0}': not a number")]
    InvalidAlpha(String),

    #[error("Alpha must be within [0, 1], got {0}")]
    AlphaOutOfRange(f64),
}

/// Validated simulator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Process table to read.
    pub input_path: PathBuf,
    /// Report file to write (overwritten if present).
    pub output_path: PathBuf,
    /// Round-robin time quantum in ticks.
    pub quantum: u64,
    /// Priority aging factor.
    pub alpha: f64,
}

impl SimConfig {
    /// Builds a configuration, enforcing `quantum >= 1` and
    /// `alpha` in `[0, 1]`.
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        quantum: u64,
        alpha: f64,
    ) -> Result<Self, ConfigError> {
        if quantum < 1 {
            return Err(ConfigError::QuantumTooSmall(quantum));
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::AlphaOutOfRange(alpha));
        }
        Ok(Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            quantum,
            alpha,
        })
    }
}

/// Parses the command line. `args[0]` is the program name; the rest must be
/// exactly the four positional arguments.
pub fn parse_args(args: &[String]) -> Result<SimConfig, ConfigError> {
    if args.len() != 5 {
        return Err(ConfigError::WrongArgumentCount(
            args.len().saturating_sub(1),
        ));
    }

    let quantum: u64 = args[3]
        .parse()
        .map_err(|_| ConfigError::InvalidQuantum(args[3].clone()))?;
    let alpha: f64 = args[4]
        .parse()
        .map_err(|_| ConfigError::InvalidAlpha(args[4].clone()))?;

    SimConfig::new(&args[1], &args[2], quantum, alpha)
}

/// Prints the usage message to stderr.
pub fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <input_file> <output_file> <quantum> <alpha>",
        program
    );
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  input_file    Process table: `pid priority arrival burst` per process");
    eprintln!("  output_file   Report destination (overwritten)");
    eprintln!("  quantum       Round-robin time quantum in ticks (integer >= 1)");
    eprintln!("  alpha         Priority aging factor (real number in [0, 1])");
}
