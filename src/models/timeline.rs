//! Gantt timeline model.
//!
//! A timeline is the ordered sequence of CPU-occupancy intervals a
//! discipline emits. Entries never overlap and appear in non-decreasing
//! start order; gaps between entries are CPU idle time.

use serde::{Deserialize, Serialize};

/// One contiguous interval `[start, end)` during which a process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Name of the process on the CPU.
    pub name: String,
    /// Start time (ticks).
    pub start: i64,
    /// End time (ticks, exclusive).
    pub end: i64,
    /// Ready-queue level that dispatched the interval (multi-level disciplines only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
}

impl TimelineEntry {
    /// Creates a new entry.
    ///
    /// # Panics
    /// If `start >= end`.
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> Self {
        let name = name.into();
        assert!(
            start < end,
            "empty timeline interval for '{name}': [{start}, {end})"
        );
        Self {
            name,
            start,
            end,
            level: None,
        }
    }

    /// Tags the entry with the queue level that dispatched it.
    pub fn at_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    /// Interval length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An idle interval `[start, end)` between two timeline entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// Start of the idle period.
    pub start: i64,
    /// End of the idle period (exclusive).
    pub end: i64,
}

/// Ordered, non-overlapping sequence of timeline entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in dispatch order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    ///
    /// # Panics
    /// If the entry overlaps or precedes the previous one.
    pub fn push(&mut self, entry: TimelineEntry) {
        if let Some(last) = self.entries.last() {
            assert!(
                entry.start >= last.end,
                "timeline entry '{}' at {} overlaps '{}' ending at {}",
                entry.name,
                entry.start,
                last.name,
                last.end
            );
        }
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry durations.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// End of the last entry (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// Entries for a given process, in dispatch order.
    pub fn entries_for(&self, name: &str) -> Vec<&TimelineEntry> {
        self.entries.iter().filter(|e| e.name == name).collect()
    }

    /// Idle periods between consecutive entries.
    ///
    /// Idle time before the first entry is not reported.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        self.entries
            .windows(2)
            .filter(|w| w[1].start > w[0].end)
            .map(|w| IdleGap {
                start: w[0].end,
                end: w[1].start,
            })
            .collect()
    }

    /// Number of times the CPU passes from one process to a different one.
    pub fn context_switches(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|w| w[0].name != w[1].name)
            .count()
    }

    /// Compact `name:start-end` rendering, e.g. `P1:0-5 P2:5-8`.
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}:{}-{}", e.name, e.start, e.end))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<TimelineEntry>> for Timeline {
    fn from(entries: Vec<TimelineEntry>) -> Self {
        let mut timeline = Timeline::new();
        for entry in entries {
            timeline.push(entry);
        }
        timeline
    }
}
