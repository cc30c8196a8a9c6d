//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed simulation result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy Time | Sum of timeline interval lengths |
//! | Utilization | busy / (makespan - first arrival) |
//! | Throughput | processes / (makespan - first arrival) |
//! | Avg Response | Mean of (first dispatch - arrival) |
//! | Avg Wait / Turnaround | As reported by the result builder |
//! | Context Switches | Adjacent timeline entries naming different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// CPU scheduling performance indicators.
///
/// All times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Total CPU busy time.
    pub busy_time: i64,
    /// Fraction of the observed span the CPU was busy (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per tick over the observed span.
    pub throughput: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Mean waiting time.
    pub avg_wait: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Longest single waiting time.
    pub max_wait: i64,
    /// Number of context switches.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    ///
    /// The observed span starts at the earliest arrival, so leading idle
    /// time before any process exists does not count against utilization.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.timeline.makespan();
        let busy_time = result.timeline.busy_time();
        let first_arrival = result.stats.iter().map(|s| s.arrival).min().unwrap_or(0);
        let span = makespan - first_arrival;

        let (utilization, throughput) = if span <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / span as f64,
                result.stats.len() as f64 / span as f64,
            )
        };

        let avg_response = if result.stats.is_empty() {
            0.0
        } else {
            let total: i64 = result.stats.iter().map(|s| s.response).sum();
            total as f64 / result.stats.len() as f64
        };

        Self {
            makespan,
            busy_time,
            utilization,
            throughput,
            avg_response,
            avg_wait: result.average_wait,
            avg_turnaround: result.average_turnaround,
            max_wait: result.stats.iter().map(|s| s.wait).max().unwrap_or(0),
            context_switches: result.timeline.context_switches(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_wait: f64, min_utilization: f64) -> bool {
        self.avg_wait <= max_avg_wait && self.utilization >= min_utilization
    }
}
