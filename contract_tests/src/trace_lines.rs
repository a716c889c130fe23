//! Trace line contract tests
//!
//! These tests define the stable shape of every line a trace can contain.

// ===== Canonical Line Shapes =====
const ARRIVAL_LINE: &str = "<time 1> [new arrival] process 2";
const RUNNING_LINE: &str = "<time 4> process 2 is running";
const RUNNING_ANNOTATED_LINE: &str = "<time 4> process 2 is running[priority 1.50]";
const FINISHED_LINE: &str = "<time 9> process 3 is finished";
const FINISHED_ANNOTATED_LINE: &str = "<time 8> process 2 is finished[priority 3.00]";
const CONTEXT_SWITCH_LINE: &str = "------------------------------ (Context-Switch)";
const IDLE_LINE: &str = "<time 2> ---- system is idle ----";
const ALL_FINISH_LINE: &str = "<time 9> all processes finish";

// ===== Contract Tests =====
