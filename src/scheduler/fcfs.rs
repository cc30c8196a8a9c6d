//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order (stable for ties).
//! The CPU idles forward to the next arrival when nothing is ready.

use log::debug;

use super::{SchedulingAlgorithm, Trace};
use crate::models::{working_copy, ProcessDescriptor, ProcessRecord, Timeline, TimelineEntry};

/// Non-preemptive FCFS discipline.
#[derive(Debug, Clone)]
pub struct Fcfs {
    records: Vec<ProcessRecord>,
}

impl Fcfs {
    /// Report header.
    pub const NAME: &'static str = "First Come First Served (FCFS)";

    /// Creates the discipline over a private copy of `processes`.
    pub fn new(processes: &[ProcessDescriptor]) -> Self {
        Self {
            records: working_copy(processes),
        }
    }
}

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn execute(mut self) -> Trace {
        self.records.sort_by_key(|r| r.arrival);

        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        for record in &mut self.records {
            if clock < record.arrival {
                clock = record.arrival;
            }
            record.mark_started(clock);
            let end = clock + record.burst;
            debug!("FCFS t={clock}: dispatch {} until {end}", record.name);
            timeline.push(TimelineEntry::new(record.name.clone(), clock, end));
            record.consume(record.burst);
            clock = end;
            record.mark_finished(clock);
        }

        Trace {
            records: self.records,
            timeline,
        }
    }
}
