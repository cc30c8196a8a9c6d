//! Process model.
//!
//! A process is characterized only by its arrival time and burst
//! (CPU service) time. Callers describe processes with
//! [`ProcessDescriptor`]; each simulation run clones those into private
//! [`ProcessRecord`]s that carry the mutable simulation state.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Caller-supplied description of a process.
///
/// Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique, non-empty process name.
    pub name: String,
    /// Arrival time (ticks, >= 0).
    pub arrival: i64,
    /// Total CPU time required (ticks, > 0).
    pub burst: i64,
}

impl ProcessDescriptor {
    /// Creates a new process descriptor.
    pub fn new(name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
        }
    }

    /// Creates a descriptor named by the given counter (`P1`, `P2`, ...).
    pub fn auto_named(namer: &mut ProcessNamer, arrival: i64, burst: i64) -> Self {
        Self::new(namer.next_name(), arrival, burst)
    }
}

/// Working state of one process inside a single simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process name.
    pub name: String,
    /// Arrival time (ticks).
    pub arrival: i64,
    /// Total CPU time required (ticks).
    pub burst: i64,
    /// CPU time still owed. `0 <= remaining <= burst`.
    pub remaining: i64,
    /// Time of first dispatch. `None` until dispatched.
    pub start: Option<i64>,
    /// Completion time. `None` until `remaining` reaches zero.
    pub finish: Option<i64>,
}

impl ProcessRecord {
    /// Creates a fresh record with `remaining = burst`.
    pub fn new(name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            remaining: burst,
            start: None,
            finish: None,
        }
    }

    /// Whether the record has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }

    /// Records the first dispatch. Later calls are ignored.
    pub fn mark_started(&mut self, now: i64) {
        if self.start.is_none() {
            self.start = Some(now);
        }
    }

    /// Consumes `ticks` of CPU time and returns the remaining work.
    ///
    /// # Panics
    /// If the record is already finished or would go negative.
    pub fn consume(&mut self, ticks: i64) -> i64 {
        assert!(
            !self.is_finished(),
            "process '{}' dispatched after finishing",
            self.name
        );
        assert!(
            ticks <= self.remaining,
            "process '{}' consumed {} ticks with only {} remaining",
            self.name,
            ticks,
            self.remaining
        );
        self.remaining -= ticks;
        self.remaining
    }

    /// Records completion at `now`.
    ///
    /// # Panics
    /// If work remains or the record was already finished.
    pub fn mark_finished(&mut self, now: i64) {
        assert_eq!(
            self.remaining, 0,
            "process '{}' finished with work remaining",
            self.name
        );
        assert!(
            self.finish.is_none(),
            "process '{}' finished twice",
            self.name
        );
        self.finish = Some(now);
    }

    /// Turnaround time (`finish - arrival`), once finished.
    pub fn turnaround(&self) -> Option<i64> {
        self.finish.map(|f| f - self.arrival)
    }

    /// Waiting time (`turnaround - burst`), once finished.
    pub fn wait(&self) -> Option<i64> {
        self.turnaround().map(|t| t - self.burst)
    }

    /// Response time (`start - arrival`), once dispatched.
    pub fn response(&self) -> Option<i64> {
        self.start.map(|s| s - self.arrival)
    }
}

impl From<&ProcessDescriptor> for ProcessRecord {
    fn from(desc: &ProcessDescriptor) -> Self {
        Self::new(desc.name.clone(), desc.arrival, desc.burst)
    }
}

/// Clones descriptors into fresh working records, preserving order.
pub fn working_copy(processes: &[ProcessDescriptor]) -> Vec<ProcessRecord> {
    processes.iter().map(ProcessRecord::from).collect()
}

/// Hands out default process names (`P1`, `P2`, ...).
///
/// Owned by whoever builds the process list, so independent sessions
/// never share a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessNamer {
    next: u32,
}

impl ProcessNamer {
    /// Creates a namer starting at `P1`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next name and advances the counter.
    pub fn next_name(&mut self) -> String {
        let name = self.peek();
        self.next += 1;
        name
    }

    /// Returns the name the next call to `next_name` will produce.
    pub fn peek(&self) -> String {
        format!("P{}", self.next)
    }

    /// Restarts numbering at `P1`.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for ProcessNamer {
    fn default() -> Self {
        Self::new()
    }
}
