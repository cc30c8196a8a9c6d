//! Process workloads for demos and testing.
//!
//! - [`sample_processes`]: the fixed five-process sample set.
//! - [`random_processes`]: seeded random workloads, reproducible per seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{ProcessDescriptor, ProcessNamer};

/// The canonical sample set: `P1(0,5) P2(1,3) P3(2,8) P4(3,6) P5(4,2)`.
pub fn sample_processes() -> Vec<ProcessDescriptor> {
    let mut namer = ProcessNamer::new();
    [(0, 5), (1, 3), (2, 8), (3, 6), (4, 2)]
        .into_iter()
        .map(|(arrival, burst)| ProcessDescriptor::auto_named(&mut namer, arrival, burst))
        .collect()
}

/// Shape of a random workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub process_count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: i64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_count: 8,
            max_arrival: 20,
            max_burst: 12,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }
}

/// Generates a reproducible random workload named `P1..Pn`.
///
/// Bounds are clamped so every generated process is valid.
pub fn random_processes(config: &WorkloadConfig, seed: u64) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut namer = ProcessNamer::new();
    let max_arrival = config.max_arrival.max(0);
    let max_burst = config.max_burst.max(1);

    (0..config.process_count)
        .map(|_| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(1..=max_burst);
            ProcessDescriptor::auto_named(&mut namer, arrival, burst)
        })
        .collect()
}
