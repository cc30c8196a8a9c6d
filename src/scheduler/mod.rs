//! Scheduling disciplines and the shared result builder.
//!
//! Every discipline clones the caller's processes into private working
//! records, simulates CPU dispatch on a discrete integer clock and emits
//! a [`Trace`]. The result builder then turns the trace into a
//! [`SimulationResult`](crate::models::SimulationResult).
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | FCFS | No | Earliest arrival |
//! | SJF | No | Shortest burst |
//! | SRTF | Yes (every tick) | Shortest remaining time |
//! | Round-Robin | Yes (quantum) | FIFO ready queue |
//! | MLFQ | Yes (per-level quantum) | Highest non-empty level, with aging |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

mod discipline;
mod fcfs;
mod kpi;
mod mlfq;
mod report;
mod request;
mod round_robin;
mod sjf;
mod srtf;

pub use discipline::{Discipline, ParseDisciplineError};
pub use fcfs::Fcfs;
pub use kpi::SimulationKpi;
pub use mlfq::{Mlfq, AGING_THRESHOLD, MLFQ_LEVELS};
pub use report::{assign_colors, build_result};
pub use request::{parse_quantum, simulate, SimulationRequest};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::models::{ProcessRecord, SimulationResult, Timeline};

/// Default Round-Robin quantum.
pub const DEFAULT_RR_QUANTUM: i64 = 2;
/// Default MLFQ level-0 quantum.
pub const DEFAULT_Q0: i64 = 2;
/// Default MLFQ level-1 quantum.
pub const DEFAULT_Q1: i64 = 4;

/// Raw output of a discipline: its mutated records and emitted timeline.
#[derive(Debug, Clone)]
pub struct Trace {
    /// Working records, every one finished.
    pub records: Vec<ProcessRecord>,
    /// Timeline in dispatch order.
    pub timeline: Timeline,
}

/// Common shape of every scheduling discipline.
///
/// Implementors take ownership of a private copy of the processes at
/// construction; `execute` consumes the instance, so a run happens at
/// most once per instance.
pub trait SchedulingAlgorithm {
    /// Report header, e.g. `"Round Robin (Q=2)"`.
    fn name(&self) -> String;

    /// Simulates dispatch to completion.
    fn execute(self) -> Trace;

    /// Simulates and builds the final result.
    fn run(self) -> SimulationResult
    where
        Self: Sized,
    {
        let name = self.name();
        let trace = self.execute();
        log::info!(
            "{name}: {} processes finished at t={}",
            trace.records.len(),
            trace.timeline.makespan()
        );
        build_result(&name, trace)
    }
}

/// Clamps a configured quantum to at least one tick.
#[inline]
pub fn clamp_quantum(quantum: i64) -> i64 {
    quantum.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::workload::{random_processes, sample_processes, WorkloadConfig};

    fn all_disciplines() -> Vec<Discipline> {
        vec![
            Discipline::Fcfs,
            Discipline::Sjf,
            Discipline::Srtf,
            Discipline::RoundRobin { quantum: 2 },
            Discipline::RoundRobin { quantum: 5 },
            Discipline::Mlfq { q0: 2, q1: 4 },
            Discipline::Mlfq { q0: 1, q1: 3 },
        ]
    }

    fn check_invariants(discipline: Discipline, processes: &[ProcessDescriptor]) {
        let trace = discipline.execute(processes);

        for r in &trace.records {
            assert_eq!(r.remaining, 0, "{discipline:?}: {} unfinished", r.name);
            let finish = r.finish.unwrap_or_else(|| panic!("{} has no finish", r.name));
            assert!(finish > r.arrival, "{discipline:?}: {} finish <= arrival", r.name);
            assert!(r.start.is_some_and(|s| s >= r.arrival));
        }

        let total_burst: i64 = processes.iter().map(|p| p.burst).sum();
        assert_eq!(trace.timeline.busy_time(), total_burst, "{discipline:?}");

        for w in trace.timeline.entries.windows(2) {
            assert!(w[0].end <= w[1].start, "{discipline:?}: overlapping entries");
        }

        for r in &trace.records {
            let busy: i64 = trace
                .timeline
                .entries_for(&r.name)
                .iter()
                .map(|e| e.duration())
                .sum();
            assert_eq!(busy, r.burst, "{discipline:?}: {} cpu time", r.name);
            let first = trace.timeline.entries_for(&r.name)[0].start;
            assert_eq!(r.start, Some(first));
            let last = trace.timeline.entries_for(&r.name).last().map(|e| e.end);
            assert_eq!(r.finish, last);
        }
    }

    #[test]
    fn test_invariants_on_sample() {
        let processes = sample_processes();
        for d in all_disciplines() {
            check_invariants(d, &processes);
        }
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        let config = WorkloadConfig::default();
        for seed in 0..40 {
            let processes = random_processes(&config, seed);
            for d in all_disciplines() {
                check_invariants(d, &processes);
            }
        }
    }

    #[test]
    fn test_invariants_with_sparse_arrivals() {
        let config = WorkloadConfig::default()
            .with_process_count(6)
            .with_max_arrival(60)
            .with_max_burst(4);
        for seed in 0..20 {
            let processes = random_processes(&config, seed);
            for d in all_disciplines() {
                check_invariants(d, &processes);
            }
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let processes = random_processes(&WorkloadConfig::default(), 7);
        for d in all_disciplines() {
            let a = d.simulate(&processes);
            let b = d.simulate(&processes.clone());
            assert_eq!(a, b, "{d:?}");
        }
    }

    #[test]
    fn test_concurrent_runs_match_sequential() {
        let processes = random_processes(&WorkloadConfig::default(), 11);
        let expected: Vec<SimulationResult> =
            all_disciplines().iter().map(|d| d.simulate(&processes)).collect();

        let actual: Vec<SimulationResult> = std::thread::scope(|s| {
            let handles: Vec<_> = all_disciplines()
                .into_iter()
                .map(|d| {
                    let input = processes.clone();
                    s.spawn(move || d.simulate(&input))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("simulation thread panicked"))
                .collect()
        });

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_single_process_every_discipline() {
        let processes = vec![ProcessDescriptor::new("Solo", 0, 7)];
        for d in all_disciplines() {
            let result = d.simulate(&processes);
            let s = &result.stats[0];
            assert_eq!(s.wait, 0, "{d:?}");
            assert_eq!(s.turnaround, 7, "{d:?}");
        }
    }

    #[test]
    fn test_non_preemptive_cover_busy_span() {
        // Gaps only where nothing was ready: with all arrivals at 0 there are none.
        let processes: Vec<ProcessDescriptor> = sample_processes()
            .into_iter()
            .map(|p| ProcessDescriptor::new(p.name, 0, p.burst))
            .collect();
        for d in [Discipline::Fcfs, Discipline::Sjf, Discipline::Srtf] {
            let trace = d.execute(&processes);
            assert!(trace.timeline.idle_gaps().is_empty(), "{d:?}");
            assert_eq!(trace.timeline.entries[0].start, 0);
        }
    }

    #[test]
    fn test_caller_input_untouched() {
        let processes = sample_processes();
        let before = processes.clone();
        for d in all_disciplines() {
            d.simulate(&processes);
        }
        assert_eq!(processes, before);
    }

    #[test]
    fn test_clamp_quantum() {
        assert_eq!(clamp_quantum(0), 1);
        assert_eq!(clamp_quantum(-5), 1);
        assert_eq!(clamp_quantum(3), 3);
    }
}
