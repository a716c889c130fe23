//! Serialized structure contract tests
//!
//! Runs and their events serialize to JSON for downstream tooling. These
//! tests pin the variant tags, field names, and top-level structure.

use serde::{Deserialize, Serialize};

// ===== Canonical Serialized Shapes =====

/// Field-for-field mirror of the run summary payload.
///
/// Deserializing an engine summary through this struct pins the field
/// names; renaming a field on either side breaks the round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryShape {
    pub total_ticks: u64,
    pub idle_ticks: u64,
    pub busy_ticks: u64,
    pub cpu_usage: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
    pub avg_turnaround: f64,
}

/// Field-for-field mirror of the per-process metrics payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsShape {
    pub pid: u32,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub waiting_time: u64,
    pub response_time: u64,
    pub turnaround_time: u64,
    pub completion_time: u64,
}

// ===== Contract Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use sched_core::{DisciplineKind, ProcessId, TraceEvent};
    use serde_json::json;

    #[test]
    fn test_running_event_schema() {
        let event = TraceEvent::Running {
            tick: 4,
            pid: ProcessId::new(2),
            priority: Some(1.5),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"Running": {"tick": 4, "pid": 2, "priority": 1.5}})
        );
    }

    #[test]
    fn test_unannotated_priority_serializes_as_null() {
        let event = TraceEvent::Running {
            tick: 0,
            pid: ProcessId::new(1),
            priority: None,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"Running": {"tick": 0, "pid": 1, "priority": null}})
        );
    }

    #[test]
    fn test_finished_event_schema() {
        let event = TraceEvent::Finished {
            tick: 8,
            pid: ProcessId::new(2),
            priority: Some(3.0),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"Finished": {"tick": 8, "pid": 2, "priority": 3.0}})
        );
    }

    #[test]
    fn test_arrival_idle_and_terminal_schemas() {
        let arrival = TraceEvent::Arrival {
            tick: 3,
            pid: ProcessId::new(2),
        };
        assert_eq!(
            serde_json::to_value(&arrival).unwrap(),
            json!({"Arrival": {"tick": 3, "pid": 2}})
        );
        assert_eq!(
            serde_json::to_value(TraceEvent::Idle { tick: 5 }).unwrap(),
            json!({"Idle": {"tick": 5}})
        );
        assert_eq!(
            serde_json::to_value(TraceEvent::AllFinished { tick: 9 }).unwrap(),
            json!({"AllFinished": {"tick": 9}})
        );
    }

    #[test]
    fn test_context_switch_is_a_unit_variant() {
        assert_eq!(
            serde_json::to_value(TraceEvent::ContextSwitch).unwrap(),
            json!("ContextSwitch")
        );
    }

    #[test]
    fn test_discipline_kind_identifiers_are_stable() {
        // These tags MUST NOT CHANGE without a deliberate format bump.
        assert_eq!(
            serde_json::to_value(DisciplineKind::Fcfs).unwrap(),
            json!("Fcfs")
        );
        assert_eq!(
            serde_json::to_value(DisciplineKind::RoundRobin).unwrap(),
            json!("RoundRobin")
        );
        assert_eq!(
            serde_json::to_value(DisciplineKind::PriorityAging).unwrap(),
            json!("PriorityAging")
        );
    }

    #[test]
    fn test_run_top_level_structure() {
        let run = fcfs_run(&reference_specs());
        let value = serde_json::to_value(&run).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["events", "kind", "processes", "summary"]);
        assert_eq!(object["kind"], json!("Fcfs"));
        assert!(object["events"].is_array());
        assert_eq!(object["processes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_summary_field_contract() {
        let run = priority_run(&reference_specs(), REFERENCE_ALPHA);
        let value = serde_json::to_value(&run.summary).unwrap();
        let shape: SummaryShape = serde_json::from_value(value).unwrap();

        assert_eq!(shape.total_ticks, 9);
        assert_eq!(shape.idle_ticks, 0);
        assert_eq!(shape.busy_ticks, 9);
        assert_eq!(shape.cpu_usage, 100.0);
        assert_eq!(shape.avg_waiting, 4.0);
        assert_eq!(shape.avg_response, 1.0);
        assert_eq!(shape.avg_turnaround, 7.0);
    }

    #[test]
    fn test_process_metrics_field_contract() {
        let run = fcfs_run(&reference_specs());
        let value = serde_json::to_value(&run.processes[0]).unwrap();
        let shape: MetricsShape = serde_json::from_value(value).unwrap();

        assert_eq!(
            shape,
            MetricsShape {
                pid: 1,
                arrival_time: 0,
                burst_time: 4,
                waiting_time: 0,
                response_time: 0,
                turnaround_time: 4,
                completion_time: 4,
            }
        );
    }

    #[test]
    fn test_trace_round_trips_through_json() {
        let run = round_robin_run(&reference_specs(), REFERENCE_QUANTUM);
        let encoded = serde_json::to_string(&run.events).unwrap();
        let decoded: Vec<TraceEvent> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, run.events);
    }
}
