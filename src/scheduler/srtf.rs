//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! The clock advances one tick at a time. Every tick the arrived process
//! with the least remaining work takes the CPU; ties go to the process
//! listed first. Consecutive ticks of the same process accumulate into a
//! single timeline entry that closes on a context switch or completion.

use log::{debug, trace};

use super::{SchedulingAlgorithm, Trace};
use crate::models::{working_copy, ProcessDescriptor, ProcessRecord, Timeline, TimelineEntry};

/// Preemptive SRTF discipline.
#[derive(Debug, Clone)]
pub struct Srtf {
    records: Vec<ProcessRecord>,
}

/// The run currently holding the CPU.
#[derive(Debug, Clone, Copy)]
struct OpenRun {
    index: usize,
    since: i64,
}

impl Srtf {
    /// Report header.
    pub const NAME: &'static str = "Shortest Remaining Time First (SRTF)";

    /// Creates the discipline over a private copy of `processes`.
    pub fn new(processes: &[ProcessDescriptor]) -> Self {
        Self {
            records: working_copy(processes),
        }
    }

    /// First arrived process with the smallest remaining time.
    fn shortest_ready(&self, clock: i64) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, r) in self.records.iter().enumerate() {
            if r.arrival > clock || r.remaining == 0 {
                continue;
            }
            if best.map_or(true, |b| r.remaining < self.records[b].remaining) {
                best = Some(i);
            }
        }
        best
    }

    fn close(&self, run: OpenRun, clock: i64, timeline: &mut Timeline) {
        let name = &self.records[run.index].name;
        timeline.push(TimelineEntry::new(name.clone(), run.since, clock));
    }
}

impl SchedulingAlgorithm for Srtf {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn execute(mut self) -> Trace {
        let n = self.records.len();
        let mut timeline = Timeline::new();
        let mut current: Option<OpenRun> = None;
        let mut clock: i64 = 0;
        let mut completed = 0;

        while completed < n {
            let Some(next) = self.shortest_ready(clock) else {
                if let Some(run) = current.take() {
                    self.close(run, clock, &mut timeline);
                }
                trace!("SRTF t={clock}: idle");
                clock += 1;
                continue;
            };

            if current.map(|run| run.index) != Some(next) {
                if let Some(run) = current.take() {
                    debug!(
                        "SRTF t={clock}: preempt {} for {}",
                        self.records[run.index].name, self.records[next].name
                    );
                    self.close(run, clock, &mut timeline);
                }
                current = Some(OpenRun {
                    index: next,
                    since: clock,
                });
                self.records[next].mark_started(clock);
            }

            let remaining = self.records[next].consume(1);
            clock += 1;

            if remaining == 0 {
                if let Some(run) = current.take() {
                    self.close(run, clock, &mut timeline);
                }
                self.records[next].mark_finished(clock);
                completed += 1;
            }
        }

        Trace {
            records: self.records,
            timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, arrival: i64, burst: i64) -> ProcessDescriptor {
        ProcessDescriptor::new(name, arrival, burst)
    }

    #[test]
    fn test_srtf_textbook() {
        let processes = vec![p("P1", 0, 8), p("P2", 1, 4), p("P3", 2, 9), p("P4", 3, 5)];
        let result = Srtf::new(&processes).run();

        assert_eq!(
            result.timeline.summary(),
            "P1:0-1 P2:1-5 P4:5-10 P1:10-17 P3:17-26"
        );
        // waits: P1 9, P2 0, P3 15, P4 2
        assert_eq!(result.stats_for("P1").map(|s| s.wait), Some(9));
        assert_eq!(result.stats_for("P3").map(|s| s.wait), Some(15));
        assert!((result.average_wait - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_start_set_on_first_dispatch_only() {
        let processes = vec![p("P1", 0, 8), p("P2", 1, 4)];
        let trace = Srtf::new(&processes).execute();
        assert_eq!(trace.records[0].start, Some(0));
        assert_eq!(trace.records[0].finish, Some(12));
    }

    #[test]
    fn test_srtf_ticks_merge_into_one_entry() {
        let processes = vec![p("A", 0, 5)];
        let trace = Srtf::new(&processes).execute();
        assert_eq!(trace.timeline.len(), 1);
        assert_eq!(trace.timeline.summary(), "A:0-5");
    }

    #[test]
    fn test_srtf_tie_goes_to_list_order() {
        // At t=2 both have 3 remaining; "Later" is listed first.
        let processes = vec![p("Later", 2, 3), p("Early", 0, 5)];
        let trace = Srtf::new(&processes).execute();
        assert_eq!(trace.timeline.summary(), "Early:0-2 Later:2-5 Early:5-8");
    }

    #[test]
    fn test_srtf_idle_gap() {
        let processes = vec![p("A", 0, 2), p("B", 4, 1)];
        let trace = Srtf::new(&processes).execute();
        assert_eq!(trace.timeline.summary(), "A:0-2 B:4-5");
    }

    #[test]
    fn test_srtf_back_to_back_same_process_after_completion() {
        let processes = vec![p("A", 0, 1), p("B", 0, 1)];
        let trace = Srtf::new(&processes).execute();
        assert_eq!(trace.timeline.summary(), "A:0-1 B:1-2");
        assert_eq!(trace.timeline.context_switches(), 1);
    }
}
