//! Tick Engine for Discipline Simulation
//!
//! One engine drives every discipline. It owns the process table, the
//! arrival and ready queues, the trace, and the statistics; the plugged-in
//! [`Discipline`] only reorders the ready queue and decides preemption.
//!
//! ## Philosophy
//!
//! - **Determinism first**: same table + same policy => same trace, every
//!   time. No clocks, no randomness, no threads.
//! - **Mechanism, not policy**: admission, execution, retirement, and
//!   bookkeeping live here exactly once; FCFS, round-robin, and priority
//!   scheduling are pure ordering decisions.
//! - **Everything on the record**: every observable step appends a
//!   [`TraceEvent`], so tests and reports read one authoritative log.
//!
//! ## Tick anatomy
//!
//! 1. Policy pre-admission hook (aging).
//! 2. Admissions: every process with `arrival_time == tick` moves to the
//!    ready-queue tail, in arrival order, with a policy hook per process.
//! 3. Selection and execution: a head with no remaining work is retired
//!    first (its completion is observed the tick after its last unit ran);
//!    then the policy picks the runner, which executes one unit this tick.
//!    An empty ready queue idles.
//!
//! The run terminates at the tick the final completion is observed; that
//! tick is the denominator for CPU usage.

use crate::event::TraceEvent;
use crate::fcfs::Fcfs;
use crate::policy::{Discipline, DisciplineKind, PolicyContext};
use crate::priority::PriorityAging;
use crate::process::{ProcessTable, Slot};
use crate::queue::ProcessQueue;
use crate::round_robin::RoundRobin;
use crate::stats::{ProcessMetrics, RunSummary, StatsCollector};
use serde::{Deserialize, Serialize};

/// Everything a completed discipline run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRun {
    pub kind: DisciplineKind,
    pub events: Vec<TraceEvent>,
    pub summary: RunSummary,
    /// Per-process metrics in input order.
    pub processes: Vec<ProcessMetrics>,
}

/// Tick-driven simulation of one discipline over one process table.
pub struct TickEngine {
    policy: Box<dyn Discipline>,
    table: ProcessTable,
    arrivals: ProcessQueue,
    ready: ProcessQueue,
    tick: u64,
    /// Consecutive ticks the current runner has executed.
    stint_ticks: u64,
    /// Who executed the previous tick; drives context-switch detection.
    last_ran: Option<Slot>,
    completed: usize,
    done: bool,
    /// Tick at which the final completion was observed.
    final_tick: u64,
    stats: StatsCollector,
    trace: Vec<TraceEvent>,
}

impl TickEngine {
    /// Creates an engine over `table` driven by `policy`.
    pub fn new(table: ProcessTable, policy: Box<dyn Discipline>) -> Self {
        let mut arrivals = ProcessQueue::new();
        for slot in table.slots_by_arrival() {
            arrivals.enqueue(slot);
        }
        let done = table.is_empty();
        Self {
            policy,
            table,
            arrivals,
            ready: ProcessQueue::new(),
            tick: 0,
            stint_ticks: 0,
            last_ran: None,
            completed: 0,
            done,
            final_tick: 0,
            stats: StatsCollector::new(),
            trace: Vec::new(),
        }
    }

    /// First-come-first-served engine.
    pub fn fcfs(table: ProcessTable) -> Self {
        Self::new(table, Box::new(Fcfs::new()))
    }

    /// Round-robin engine with the given quantum.
    pub fn round_robin(table: ProcessTable, quantum: u64) -> Self {
        Self::new(table, Box::new(RoundRobin::new(quantum)))
    }

    /// Preemptive-priority engine with the given aging factor.
    pub fn priority_aging(table: ProcessTable, alpha: f64) -> Self {
        Self::new(table, Box::new(PriorityAging::new(alpha)))
    }

    /// Advances the simulation by one tick. Does nothing once the run is
    /// complete.
    pub fn step(&mut self) {
        if self.done {
            return;
        }
        let mut ctx = PolicyContext {
            tick: self.tick,
            table: &mut self.table,
            ready: &mut self.ready,
            stint_ticks: self.stint_ticks,
        };
        self.policy.before_admission(&mut ctx);
        self.admit_arrivals();
        self.dispatch_or_idle();
        self.tick += 1;
    }

    /// Runs to completion and yields the run artifacts.
    pub fn run(mut self) -> DisciplineRun {
        while !self.done {
            self.step();
        }
        self.into_run()
    }

    pub fn kind(&self) -> DisciplineKind {
        self.policy.kind()
    }

    /// Next tick to simulate.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The trace recorded so far.
    ///
    /// Used in tests to verify scheduling behavior.
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    pub fn process_table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    pub fn pending_len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    fn admit_arrivals(&mut self) {
        while let Some(slot) = self.arrivals.head() {
            if self.table.record(slot).arrival_time != self.tick {
                break;
            }
            self.arrivals.dequeue();
            self.ready.enqueue(slot);
            let pid = self.table.record(slot).pid;
            self.trace.push(TraceEvent::Arrival {
                tick: self.tick,
                pid,
            });
            let mut ctx = PolicyContext {
                tick: self.tick,
                table: &mut self.table,
                ready: &mut self.ready,
                stint_ticks: self.stint_ticks,
            };
            self.policy.on_admit(&mut ctx, slot);
        }
    }

    fn dispatch_or_idle(&mut self) {
        let head = match self.ready.head() {
            Some(head) => head,
            None => {
                self.idle();
                return;
            }
        };

        if self.table.record(head).remaining_time == 0 {
            self.retire(head);
            if self.done {
                return;
            }
            let mut ctx = PolicyContext {
                tick: self.tick,
                table: &mut self.table,
                ready: &mut self.ready,
                stint_ticks: self.stint_ticks,
            };
            match self.policy.select_successor(&mut ctx) {
                Some(next) => {
                    self.trace.push(TraceEvent::ContextSwitch);
                    self.execute(next);
                }
                None => self.idle(),
            }
            return;
        }

        let mut ctx = PolicyContext {
            tick: self.tick,
            table: &mut self.table,
            ready: &mut self.ready,
            stint_ticks: self.stint_ticks,
        };
        let runner = self.policy.select_runner(&mut ctx, head);
        if self.last_ran.is_some() && self.last_ran != Some(runner) {
            self.trace.push(TraceEvent::ContextSwitch);
        }
        self.execute(runner);
    }

    /// Observes a completion: the head executed its last unit the previous
    /// tick and leaves the system now.
    fn retire(&mut self, slot: Slot) {
        let tick = self.tick;
        let last = self.completed + 1 == self.table.len();
        let annotate = self.policy.annotates_priority() && !last;

        let record = self.table.record_mut(slot);
        record.completion_time = Some(tick);
        record.turnaround_time = tick - record.arrival_time;
        record.waiting_time = record.turnaround_time - record.burst_time;

        let pid = record.pid;
        let priority = if annotate {
            Some(record.dynamic_priority)
        } else {
            None
        };
        let waiting = record.waiting_time;
        let response = record.response_time.unwrap_or(0);
        let turnaround = record.turnaround_time;

        self.stats.on_completion(waiting, response, turnaround);
        self.trace.push(TraceEvent::Finished {
            tick,
            pid,
            priority,
        });

        self.ready.remove(slot);
        self.completed += 1;
        self.last_ran = None;

        if last {
            self.trace.push(TraceEvent::AllFinished { tick });
            self.final_tick = tick;
            self.done = true;
        }
    }

    /// Gives `slot` the CPU for this tick.
    fn execute(&mut self, slot: Slot) {
        if self.last_ran != Some(slot) {
            self.stint_ticks = 0;
        }
        let tick = self.tick;
        let annotate = self.policy.annotates_priority();

        let record = self.table.record_mut(slot);
        if record.response_time.is_none() {
            record.response_time = Some(tick - record.arrival_time);
        }
        let pid = record.pid;
        let priority = if annotate {
            Some(record.dynamic_priority)
        } else {
            None
        };
        if record.remaining_time > 0 {
            record.remaining_time -= 1;
        }

        self.trace.push(TraceEvent::Running {
            tick,
            pid,
            priority,
        });
        self.stats.on_busy_tick();
        self.stint_ticks += 1;
        self.last_ran = Some(slot);
    }

    fn idle(&mut self) {
        self.trace.push(TraceEvent::Idle { tick: self.tick });
        self.stats.on_idle_tick();
        self.last_ran = None;
        self.stint_ticks = 0;
    }

    fn into_run(self) -> DisciplineRun {
        let kind = self.policy.kind();
        let summary = self.stats.finalize(self.final_tick);
        let processes = self.table.iter().map(ProcessMetrics::from_record).collect();
        DisciplineRun {
            kind,
            events: self.trace,
            summary,
            processes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessId, ProcessSpec};

    fn spec(pid: u32, priority: f64, arrival: u64, burst: u64) -> ProcessSpec {
        ProcessSpec {
            pid: ProcessId::new(pid),
            base_priority: priority,
            arrival_time: arrival,
            burst_time: burst,
        }
    }

    fn batch() -> Vec<ProcessSpec> {
        vec![spec(1, 1.0, 0, 4), spec(2, 2.0, 1, 3), spec(3, 3.0, 2, 2)]
    }

    fn engines_for(specs: &[ProcessSpec]) -> Vec<TickEngine> {
        vec![
            TickEngine::fcfs(ProcessTable::from_specs(specs)),
            TickEngine::round_robin(ProcessTable::from_specs(specs), 2),
            TickEngine::priority_aging(ProcessTable::from_specs(specs), 0.5),
        ]
    }

    #[test]
    fn test_deterministic_runs() {
        let first = TickEngine::round_robin(ProcessTable::from_specs(&batch()), 2).run();
        let second = TickEngine::round_robin(ProcessTable::from_specs(&batch()), 2).run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_process_conservation_every_tick() {
        for mut engine in engines_for(&batch()) {
            let n = engine.process_table().len();
            while !engine.is_done() {
                engine.step();
                assert_eq!(
                    engine.pending_len() + engine.ready_len() + engine.completed_count(),
                    n
                );
            }
            assert_eq!(engine.pending_len(), 0);
            assert_eq!(engine.ready_len(), 0);
            assert_eq!(engine.completed_count(), n);
        }
    }

    #[test]
    fn test_admission_happens_exactly_at_arrival_tick() {
        let mut engine = TickEngine::fcfs(ProcessTable::from_specs(&[spec(1, 1.0, 3, 1)]));
        engine.step();
        engine.step();
        engine.step();
        assert_eq!(engine.ready_len(), 0);
        assert!(engine
            .trace()
            .iter()
            .all(|event| matches!(event, TraceEvent::Idle { .. })));

        engine.step();
        assert!(engine
            .trace()
            .contains(&TraceEvent::Arrival {
                tick: 3,
                pid: ProcessId::new(1),
            }));
    }

    #[test]
    fn test_turnaround_identity_across_disciplines() {
        for engine in engines_for(&batch()) {
            let run = engine.run();
            for process in &run.processes {
                assert_eq!(
                    process.turnaround_time,
                    process.waiting_time + process.burst_time
                );
                assert_eq!(
                    process.turnaround_time,
                    process.completion_time - process.arrival_time
                );
                assert!(process.response_time <= process.waiting_time);
            }
        }
    }

    #[test]
    fn test_idle_plus_busy_equals_total() {
        let gapped = vec![spec(1, 1.0, 0, 2), spec(2, 2.0, 5, 1)];
        for engine in engines_for(&gapped) {
            let run = engine.run();
            assert_eq!(
                run.summary.idle_ticks + run.summary.busy_ticks,
                run.summary.total_ticks
            );
        }
    }

    #[test]
    fn test_exactly_n_finish_events_and_terminal_all_finished() {
        for engine in engines_for(&batch()) {
            let n = engine.process_table().len();
            let run = engine.run();
            let finishes = run
                .events
                .iter()
                .filter(|event| matches!(event, TraceEvent::Finished { .. }))
                .count();
            assert_eq!(finishes, n);
            assert!(matches!(
                run.events.last(),
                Some(TraceEvent::AllFinished { .. })
            ));
        }
    }

    #[test]
    fn test_waiting_priority_never_decreases() {
        let mut engine =
            TickEngine::priority_aging(ProcessTable::from_specs(&batch()), 0.5);
        let mut floor = vec![f64::MIN; engine.process_table().len()];
        while !engine.is_done() {
            engine.step();
            for (slot, low) in floor.iter_mut().enumerate() {
                let priority = engine.process_table().record(slot).dynamic_priority;
                assert!(priority >= *low);
                *low = priority;
            }
        }
    }

    #[test]
    fn test_empty_table_run() {
        let engine = TickEngine::fcfs(ProcessTable::from_specs(&[]));
        assert!(engine.is_done());
        let run = engine.run();
        assert!(run.events.is_empty());
        assert_eq!(run.summary.total_ticks, 0);
        assert_eq!(run.summary.cpu_usage, 0.0);
        assert!(run.processes.is_empty());
    }

    #[test]
    fn test_step_after_done_is_noop() {
        let mut engine = TickEngine::fcfs(ProcessTable::from_specs(&[spec(1, 1.0, 0, 1)]));
        while !engine.is_done() {
            engine.step();
        }
        let events = engine.trace().len();
        let tick = engine.current_tick();
        engine.step();
        assert_eq!(engine.trace().len(), events);
        assert_eq!(engine.current_tick(), tick);
    }

    #[test]
    fn test_kind_reports_active_policy() {
        let specs = batch();
        assert_eq!(
            TickEngine::fcfs(ProcessTable::from_specs(&specs)).kind(),
            DisciplineKind::Fcfs
        );
        assert_eq!(
            TickEngine::round_robin(ProcessTable::from_specs(&specs), 2).kind(),
            DisciplineKind::RoundRobin
        );
        assert_eq!(
            TickEngine::priority_aging(ProcessTable::from_specs(&specs), 0.5).kind(),
            DisciplineKind::PriorityAging
        );
    }
}
