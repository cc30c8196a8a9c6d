//! Result builder.
//!
//! Turns a discipline's finished records and timeline into a
//! [`SimulationResult`]: per-process statistics, averages, display colors
//! and a fixed-width text report.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Wait | turnaround - burst |
//! | Response | start - arrival |

use std::fmt::Write as _;

use super::Trace;
use crate::models::{ColorAssignment, ProcessRecord, ProcessStats, SimulationResult, GANTT_PALETTE};

const RULE_WIDTH: usize = 55;

/// Builds the final result for a completed run.
///
/// Statistics are reported in arrival order (stable); the timeline keeps
/// dispatch order. Colors follow the order of `trace.records`.
///
/// # Panics
/// If there are no records, a record never finished, or a derived wait
/// is negative. Each indicates a defect in the discipline, not bad input.
pub fn build_result(discipline: &str, trace: Trace) -> SimulationResult {
    let Trace { records, timeline } = trace;
    assert!(!records.is_empty(), "simulation ran without processes");

    let colors = assign_colors(&records);

    let mut sorted: Vec<&ProcessRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.arrival);
    let stats: Vec<ProcessStats> = sorted.into_iter().map(process_stats).collect();

    let count = stats.len() as f64;
    let total_wait: i64 = stats.iter().map(|s| s.wait).sum();
    let total_turnaround: i64 = stats.iter().map(|s| s.turnaround).sum();
    let average_wait = total_wait as f64 / count;
    let average_turnaround = total_turnaround as f64 / count;

    let report = format_report(discipline, &stats, average_wait, average_turnaround);

    SimulationResult {
        discipline: discipline.to_string(),
        timeline,
        stats,
        average_wait,
        average_turnaround,
        report,
        colors,
    }
}

/// Assigns palette colors by first appearance, cycling after eight names.
pub fn assign_colors(records: &[ProcessRecord]) -> Vec<ColorAssignment> {
    let mut colors: Vec<ColorAssignment> = Vec::new();
    for record in records {
        if colors.iter().any(|c| c.name == record.name) {
            continue;
        }
        let color = GANTT_PALETTE[colors.len() % GANTT_PALETTE.len()];
        colors.push(ColorAssignment {
            name: record.name.clone(),
            color,
        });
    }
    colors
}

fn process_stats(record: &ProcessRecord) -> ProcessStats {
    let (Some(start), Some(finish)) = (record.start, record.finish) else {
        panic!("process '{}' did not finish", record.name);
    };
    assert_eq!(
        record.remaining, 0,
        "process '{}' finished with work remaining",
        record.name
    );

    let turnaround = finish - record.arrival;
    let wait = turnaround - record.burst;
    assert!(
        wait >= 0,
        "process '{}' has negative wait {wait}",
        record.name
    );

    ProcessStats {
        name: record.name.clone(),
        arrival: record.arrival,
        burst: record.burst,
        start,
        finish,
        wait,
        turnaround,
        response: start - record.arrival,
    }
}

fn format_report(
    discipline: &str,
    stats: &[ProcessStats],
    average_wait: f64,
    average_turnaround: f64,
) -> String {
    let banner = "═".repeat(39);
    let rule = "─".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "  {discipline}");
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<8} {:<8} {:<8} {:<8} {:<8} {:<10}",
        "Name", "Arrival", "Burst", "Finish", "Wait", "Turnaround"
    );
    let _ = writeln!(out, "{rule}");
    for s in stats {
        let _ = writeln!(
            out,
            "{:<8} {:<8} {:<8} {:<8} {:<8} {:<10}",
            s.name, s.arrival, s.burst, s.finish, s.wait, s.turnaround
        );
    }
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Average Waiting Time:    {average_wait:.2}");
    let _ = writeln!(out, "Average Turnaround Time: {average_turnaround:.2}");
    out
}
