//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//! 1. Move every arrived, unfinished process into the ready set, in
//!    input order. The ready set keeps insertion order across rounds.
//! 2. If the ready set is empty, idle one tick.
//! 3. Otherwise dispatch the ready process with the smallest burst to
//!    completion. Ties go to the earliest entry in the ready set.

use log::{debug, trace};

use super::{SchedulingAlgorithm, Trace};
use crate::models::{working_copy, ProcessDescriptor, ProcessRecord, Timeline, TimelineEntry};

/// Non-preemptive SJF discipline.
#[derive(Debug, Clone)]
pub struct Sjf {
    records: Vec<ProcessRecord>,
}

impl Sjf {
    /// Report header.
    pub const NAME: &'static str = "Shortest Job First (SJF)";

    /// Creates the discipline over a private copy of `processes`.
    pub fn new(processes: &[ProcessDescriptor]) -> Self {
        Self {
            records: working_copy(processes),
        }
    }
}

/// Position of the first element with the smallest key.
fn first_min_by_key<K: Ord>(items: &[usize], key: impl Fn(usize) -> K) -> Option<usize> {
    let mut best: Option<(usize, K)> = None;
    for (pos, &idx) in items.iter().enumerate() {
        let k = key(idx);
        let better = match &best {
            Some((_, best_key)) => k < *best_key,
            None => true,
        };
        if better {
            best = Some((pos, k));
        }
    }
    best.map(|(pos, _)| pos)
}

impl SchedulingAlgorithm for Sjf {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn execute(mut self) -> Trace {
        let n = self.records.len();
        let mut timeline = Timeline::new();
        let mut in_ready = vec![false; n];
        let mut ready: Vec<usize> = Vec::new();
        let mut clock: i64 = 0;
        let mut completed = 0;

        while completed < n {
            for (i, record) in self.records.iter().enumerate() {
                if record.arrival <= clock && !record.is_finished() && !in_ready[i] {
                    in_ready[i] = true;
                    ready.push(i);
                }
            }

            let Some(pos) = first_min_by_key(&ready, |i| self.records[i].burst) else {
                trace!("SJF t={clock}: idle");
                clock += 1;
                continue;
            };

            let idx = ready.remove(pos);
            let record = &mut self.records[idx];
            record.mark_started(clock);
            let end = clock + record.burst;
            debug!("SJF t={clock}: dispatch {} (burst {})", record.name, record.burst);
            timeline.push(TimelineEntry::new(record.name.clone(), clock, end));
            record.consume(record.burst);
            clock = end;
            record.mark_finished(clock);
            completed += 1;
        }

        Trace {
            records: self.records,
            timeline,
        }
    }
}
