//! Simulation result model.
//!
//! The output contract handed to the presentation layer: the execution
//! timeline, per-process statistics, a formatted report and a display
//! color per process.

use serde::{Deserialize, Serialize};

use super::Timeline;

/// An sRGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` hex notation.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fixed Gantt palette, assigned to processes in first-seen order.
pub const GANTT_PALETTE: [Rgb; 8] = [
    Rgb::new(231, 76, 60),  // red
    Rgb::new(52, 152, 219), // blue
    Rgb::new(46, 204, 113), // green
    Rgb::new(155, 89, 182), // purple
    Rgb::new(241, 196, 15), // yellow
    Rgb::new(230, 126, 34), // orange
    Rgb::new(26, 188, 156), // teal
    Rgb::new(52, 73, 94),   // dark blue
];

/// Display color bound to one process name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    /// Process name.
    pub name: String,
    /// Assigned color.
    pub color: Rgb,
}

/// Derived statistics for one finished process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process name.
    pub name: String,
    /// Arrival time.
    pub arrival: i64,
    /// Burst time.
    pub burst: i64,
    /// First dispatch time.
    pub start: i64,
    /// Completion time.
    pub finish: i64,
    /// `turnaround - burst`.
    pub wait: i64,
    /// `finish - arrival`.
    pub turnaround: i64,
    /// `start - arrival`.
    pub response: i64,
}

/// Outcome of one simulation run.
///
/// Built once by the result builder and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Human-readable discipline name (report header).
    pub discipline: String,
    /// Execution timeline in dispatch order.
    pub timeline: Timeline,
    /// Per-process statistics sorted by arrival (stable).
    pub stats: Vec<ProcessStats>,
    /// Mean waiting time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Formatted statistics report.
    pub report: String,
    /// Display colors in first-seen order.
    pub colors: Vec<ColorAssignment>,
}

impl SimulationResult {
    /// Color assigned to a process, if it took part in the run.
    pub fn color_of(&self, name: &str) -> Option<Rgb> {
        self.colors
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.color)
    }

    /// Statistics for a process.
    pub fn stats_for(&self, name: &str) -> Option<&ProcessStats> {
        self.stats.iter().find(|s| s.name == name)
    }

    /// Number of processes simulated.
    pub fn process_count(&self) -> usize {
        self.stats.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex() {
        assert_eq!(GANTT_PALETTE[0].hex(), "#e74c3c");
        assert_eq!(GANTT_PALETTE[7].hex(), "#34495e");
    }

    #[test]
    fn test_lookup_helpers() {
        let result = SimulationResult {
            discipline: "FCFS".into(),
            timeline: Timeline::new(),
            stats: vec![ProcessStats {
                name: "P1".into(),
                arrival: 0,
                burst: 3,
                start: 0,
                finish: 3,
                wait: 0,
                turnaround: 3,
                response: 0,
            }],
            average_wait: 0.0,
            average_turnaround: 3.0,
            report: String::new(),
            colors: vec![ColorAssignment {
                name: "P1".into(),
                color: GANTT_PALETTE[0],
            }],
        };
        assert_eq!(result.color_of("P1"), Some(GANTT_PALETTE[0]));
        assert_eq!(result.color_of("P2"), None);
        assert_eq!(result.stats_for("P1").map(|s| s.finish), Some(3));
        assert_eq!(result.process_count(), 1);
    }
}
