//! Round-Robin.
//!
//! # Algorithm
//! 1. Admit every process with `arrival <= clock` to the tail of a single
//!    FIFO queue (arrival order, stable).
//! 2. If the queue is empty, jump to the next arrival or stop.
//! 3. Run the head for `min(quantum, remaining)` ticks.
//! 4. Admit arrivals that happened during the slice, *then* re-queue the
//!    process that just ran if it still has work.

use std::collections::VecDeque;

use log::debug;

use super::{clamp_quantum, SchedulingAlgorithm, Trace};
use crate::models::{working_copy, ProcessDescriptor, ProcessRecord, Timeline, TimelineEntry};

/// Quantum-based Round-Robin discipline.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    records: Vec<ProcessRecord>,
    quantum: i64,
}

impl RoundRobin {
    /// Creates the discipline over a private copy of `processes`.
    ///
    /// Quanta below one are treated as one.
    pub fn new(processes: &[ProcessDescriptor], quantum: i64) -> Self {
        Self {
            records: working_copy(processes),
            quantum: clamp_quantum(quantum),
        }
    }

    /// Effective (clamped) quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Pushes every not-yet-admitted record with `arrival <= clock`.
fn admit(records: &[ProcessRecord], next: &mut usize, clock: i64, queue: &mut VecDeque<usize>) {
    while *next < records.len() && records[*next].arrival <= clock {
        queue.push_back(*next);
        *next += 1;
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> String {
        format!("Round Robin (Q={})", self.quantum)
    }

    fn execute(mut self) -> Trace {
        self.records.sort_by_key(|r| r.arrival);

        let mut timeline = Timeline::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut clock: i64 = 0;
        let mut next = 0;

        loop {
            admit(&self.records, &mut next, clock, &mut queue);

            let Some(idx) = queue.pop_front() else {
                match self.records.get(next) {
                    Some(upcoming) => {
                        clock = upcoming.arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let record = &mut self.records[idx];
            record.mark_started(clock);
            let slice = self.quantum.min(record.remaining);
            debug!("RR t={clock}: dispatch {} for {slice}", record.name);
            timeline.push(TimelineEntry::new(record.name.clone(), clock, clock + slice));
            let remaining = record.consume(slice);
            clock += slice;

            // Arrivals during the slice queue ahead of the preempted process.
            admit(&self.records, &mut next, clock, &mut queue);

            if remaining > 0 {
                queue.push_back(idx);
            } else {
                self.records[idx].mark_finished(clock);
            }
        }

        Trace {
            records: self.records,
            timeline,
        }
    }
}
