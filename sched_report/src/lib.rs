//! # Sched Report
//!
//! Renders completed discipline runs into the fixed plain-text report.
//!
//! ## Philosophy
//!
//! - **Presentation, not authority**: the engine produced the trace and the
//!   summary; this crate only lays them out.
//! - **Byte-stable output**: separators, spacing (including the trailing
//!   space on the time-average lines), and two-decimal rounding are part of
//!   the report contract and pinned by tests.

use sched_core::DisciplineRun;

/// Rule between a section header and its trace, and again before the
/// summary block.
pub const SECTION_RULE: &str = "====================================================";

/// Trailer closing each discipline section.
pub const RUN_TRAILER: &str =
    "*********************************************************************************";

/// Renders one discipline section: header, trace, summary block, trailer.
pub fn render_run(run: &DisciplineRun) -> String {
    let mut text = String::new();
    text.push_str(&format!("Scheduling : {}\n", run.kind.title()));
    text.push_str(SECTION_RULE);
    text.push('\n');
    for event in &run.events {
        text.push_str(&format!("{event}\n"));
    }
    text.push_str(SECTION_RULE);
    text.push('\n');
    text.push_str(&format!(
        "Average cpu usage : {:.2} %\n",
        run.summary.cpu_usage
    ));
    text.push_str(&format!(
        "Average waiting time : {:.2} \n",
        run.summary.avg_waiting
    ));
    text.push_str(&format!(
        "Average response time : {:.2} \n",
        run.summary.avg_response
    ));
    text.push_str(&format!(
        "Average turnaround time : {:.2} \n",
        run.summary.avg_turnaround
    ));
    text.push_str(RUN_TRAILER);
    text.push('\n');
    text
}

/// Renders the full report: one section per run, in the given order,
/// nothing in between.
pub fn render_report(runs: &[DisciplineRun]) -> String {
    runs.iter().map(render_run).collect()
}
