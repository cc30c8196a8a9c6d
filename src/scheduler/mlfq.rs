//! Multi-Level Feedback Queue with aging.
//!
//! Three FIFO ready queues, level 0 (highest priority) to level 2.
//!
//! | Level | Quantum | On full-quantum expiry |
//! |-------|---------|------------------------|
//! | 0 | `q0` (default 2) | Demote to level 1 |
//! | 1 | `q1` (default 4) | Demote to level 2 |
//! | 2 | Unbounded (FCFS) | - |
//!
//! # Algorithm
//! Each round:
//! 1. Admit arrivals (`arrival <= clock`) into level 0.
//! 2. Age: an entry at level >= 1 that has waited in its current queue
//!    more than [`AGING_THRESHOLD`] ticks moves up one level, but only
//!    while some higher level is non-empty.
//! 3. Dispatch the head of the highest non-empty level for
//!    `min(quantum, remaining)`; if all levels are empty, jump to the
//!    next arrival.
//! 4. Admit arrivals that happened during the slice.
//! 5. Finish, demote (full quantum used above the lowest level) or
//!    re-queue at the same level keeping its queue-entry time.
//!
//! Every process starts at level 0; there is no caller-supplied priority.

use std::collections::VecDeque;

use log::{debug, trace};

use super::{clamp_quantum, SchedulingAlgorithm, Trace, DEFAULT_Q0, DEFAULT_Q1};
use crate::models::{working_copy, ProcessDescriptor, ProcessRecord, Timeline, TimelineEntry};

/// Number of priority levels.
pub const MLFQ_LEVELS: usize = 3;

/// Ticks an entry may wait in its current queue before it is promoted.
pub const AGING_THRESHOLD: i64 = 10;

const LOWEST_LEVEL: usize = MLFQ_LEVELS - 1;

/// A queued process and when it entered its current queue.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    index: usize,
    enter_time: i64,
}

/// Three-level feedback queue discipline.
#[derive(Debug, Clone)]
pub struct Mlfq {
    records: Vec<ProcessRecord>,
    q0: i64,
    q1: i64,
}

impl Mlfq {
    /// Creates the discipline over a private copy of `processes`.
    ///
    /// Quanta below one are treated as one.
    pub fn new(processes: &[ProcessDescriptor], q0: i64, q1: i64) -> Self {
        Self {
            records: working_copy(processes),
            q0: clamp_quantum(q0),
            q1: clamp_quantum(q1),
        }
    }

    /// Creates the discipline with the default quanta (2, 4).
    pub fn with_defaults(processes: &[ProcessDescriptor]) -> Self {
        Self::new(processes, DEFAULT_Q0, DEFAULT_Q1)
    }

    /// Quantum for a level; `None` means run to completion.
    pub fn level_quantum(&self, level: usize) -> Option<i64> {
        match level {
            0 => Some(self.q0),
            1 => Some(self.q1),
            _ => None,
        }
    }
}

/// The three ready queues.
#[derive(Debug, Default)]
struct LevelQueues {
    levels: [VecDeque<QueueEntry>; MLFQ_LEVELS],
}

impl LevelQueues {
    fn push(&mut self, level: usize, entry: QueueEntry) {
        self.levels[level].push_back(entry);
    }

    /// Pops the head of the highest-priority non-empty level.
    fn pop_highest(&mut self) -> Option<(usize, QueueEntry)> {
        self.levels
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|entry| (level, entry)))
    }

    fn any_above(&self, level: usize) -> bool {
        self.levels[..level].iter().any(|q| !q.is_empty())
    }

    /// Promotes entries that waited too long, level 1 first.
    fn age(&mut self, clock: i64, records: &[ProcessRecord]) {
        for level in 1..MLFQ_LEVELS {
            if self.levels[level].is_empty() || !self.any_above(level) {
                continue;
            }
            let (promoted, kept): (Vec<QueueEntry>, Vec<QueueEntry>) = self.levels[level]
                .drain(..)
                .partition(|e| clock - e.enter_time > AGING_THRESHOLD);
            self.levels[level] = kept.into();
            for mut entry in promoted {
                debug!(
                    "MLFQ t={clock}: promote {} to level {}",
                    records[entry.index].name,
                    level - 1
                );
                entry.enter_time = clock;
                self.push(level - 1, entry);
            }
        }
    }
}

/// Admits every not-yet-admitted record with `arrival <= clock` into level 0.
fn admit(
    records: &[ProcessRecord],
    next: &mut usize,
    clock: i64,
    queues: &mut LevelQueues,
) {
    while *next < records.len() && records[*next].arrival <= clock {
        queues.push(
            0,
            QueueEntry {
                index: *next,
                enter_time: clock,
            },
        );
        *next += 1;
    }
}

impl SchedulingAlgorithm for Mlfq {
    fn name(&self) -> String {
        format!("MLFQ [Q0={}, Q1={}, Q2=FCFS]", self.q0, self.q1)
    }

    fn execute(mut self) -> Trace {
        self.records.sort_by_key(|r| r.arrival);

        let n = self.records.len();
        let mut timeline = Timeline::new();
        let mut queues = LevelQueues::default();
        let mut clock: i64 = 0;
        let mut next = 0;
        let mut completed = 0;

        while completed < n {
            admit(&self.records, &mut next, clock, &mut queues);
            queues.age(clock, &self.records);

            let Some((level, mut entry)) = queues.pop_highest() else {
                match self.records.get(next) {
                    Some(upcoming) => {
                        trace!("MLFQ t={clock}: idle until {}", upcoming.arrival);
                        clock = upcoming.arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let quantum = self.level_quantum(level);
            let record = &mut self.records[entry.index];
            record.mark_started(clock);
            let slice = quantum.map_or(record.remaining, |q| q.min(record.remaining));
            debug!(
                "MLFQ t={clock}: dispatch {} at level {level} for {slice}",
                record.name
            );
            timeline.push(
                TimelineEntry::new(record.name.clone(), clock, clock + slice).at_level(level),
            );
            let remaining = record.consume(slice);
            clock += slice;

            admit(&self.records, &mut next, clock, &mut queues);

            if remaining == 0 {
                self.records[entry.index].mark_finished(clock);
                completed += 1;
            } else if quantum == Some(slice) && level < LOWEST_LEVEL {
                debug!(
                    "MLFQ t={clock}: demote {} to level {}",
                    self.records[entry.index].name,
                    level + 1
                );
                entry.enter_time = clock;
                queues.push(level + 1, entry);
            } else {
                queues.push(level, entry);
            }
        }

        Trace {
            records: self.records,
            timeline,
        }
    }
}
