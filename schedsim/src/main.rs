//! # SchedSim CLI
//!
//! Main entry point for the scheduling-discipline simulator.

use schedsim::{execute, parse_args, print_usage};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    if let Err(e) = execute(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
