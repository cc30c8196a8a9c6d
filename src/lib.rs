//! CPU scheduling simulator.
//!
//! Simulates single-CPU scheduling disciplines over processes described
//! only by arrival and burst time, producing a Gantt timeline and
//! waiting/turnaround statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `ProcessRecord`,
//!   `Timeline`, `TimelineEntry`, `SimulationResult`
//! - **`scheduler`**: FCFS, SJF, SRTF, Round-Robin and MLFQ, the
//!   `Discipline` selector, the result builder and KPIs
//! - **`validation`**: Input checks (empty list, duplicate names, bad bursts)
//! - **`workload`**: Sample and seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::scheduler::Discipline;
//! use u_cpusched::workload::sample_processes;
//!
//! let result = Discipline::mlfq().simulate(&sample_processes());
//! assert_eq!(result.process_count(), 5);
//! println!("{}", result.report);
//! ```
//!
//! # Architecture
//!
//! The engine is sequential and deterministic. Each run owns a private
//! clone of its input, so simulations never share mutable state and can
//! run on separate threads freely.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
