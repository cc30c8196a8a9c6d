//! Closed set of scheduling disciplines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    clamp_quantum, Fcfs, Mlfq, RoundRobin, SchedulingAlgorithm, Sjf, Srtf, Trace,
    DEFAULT_Q0, DEFAULT_Q1, DEFAULT_RR_QUANTUM,
};
use crate::models::{ProcessDescriptor, SimulationResult};

/// A scheduling discipline together with its quantum parameters.
///
/// Chosen once per run. Quanta below one are clamped to one when the
/// discipline is instantiated, never rejected.
///
/// Serialized with an internal `kind` tag:
/// `{"kind": "RoundRobin", "quantum": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Discipline {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        #[serde(default = "default_rr_quantum")]
        quantum: i64,
    },
    /// Three-level feedback queue with aging.
    #[serde(rename = "MLFQ")]
    Mlfq {
        #[serde(default = "default_q0")]
        q0: i64,
        #[serde(default = "default_q1")]
        q1: i64,
    },
}

fn default_rr_quantum() -> i64 {
    DEFAULT_RR_QUANTUM
}

fn default_q0() -> i64 {
    DEFAULT_Q0
}

fn default_q1() -> i64 {
    DEFAULT_Q1
}

impl Discipline {
    /// Round-Robin with the default quantum.
    pub fn round_robin() -> Self {
        Discipline::RoundRobin {
            quantum: DEFAULT_RR_QUANTUM,
        }
    }

    /// MLFQ with the default level quanta.
    pub fn mlfq() -> Self {
        Discipline::Mlfq {
            q0: DEFAULT_Q0,
            q1: DEFAULT_Q1,
        }
    }

    /// Short identifier: `FCFS`, `SJF`, `SRTF`, `RoundRobin` or `MLFQ`.
    pub fn identifier(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Srtf => "SRTF",
            Discipline::RoundRobin { .. } => "RoundRobin",
            Discipline::Mlfq { .. } => "MLFQ",
        }
    }

    /// Report header for this discipline, with clamped quanta.
    pub fn display_name(&self) -> String {
        match *self {
            Discipline::Fcfs => Fcfs::NAME.to_string(),
            Discipline::Sjf => Sjf::NAME.to_string(),
            Discipline::Srtf => Srtf::NAME.to_string(),
            Discipline::RoundRobin { quantum } => {
                format!("Round Robin (Q={})", clamp_quantum(quantum))
            }
            Discipline::Mlfq { q0, q1 } => format!(
                "MLFQ [Q0={}, Q1={}, Q2=FCFS]",
                clamp_quantum(q0),
                clamp_quantum(q1)
            ),
        }
    }

    /// Whether the discipline can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        !matches!(self, Discipline::Fcfs | Discipline::Sjf)
    }

    /// Runs the discipline and returns the raw trace.
    pub fn execute(&self, processes: &[ProcessDescriptor]) -> Trace {
        match *self {
            Discipline::Fcfs => Fcfs::new(processes).execute(),
            Discipline::Sjf => Sjf::new(processes).execute(),
            Discipline::Srtf => Srtf::new(processes).execute(),
            Discipline::RoundRobin { quantum } => RoundRobin::new(processes, quantum).execute(),
            Discipline::Mlfq { q0, q1 } => Mlfq::new(processes, q0, q1).execute(),
        }
    }

    /// Runs the discipline and builds the full result.
    ///
    /// The caller's processes are cloned; `processes` must be non-empty
    /// and pass [`validate_processes`](crate::validation::validate_processes).
    pub fn simulate(&self, processes: &[ProcessDescriptor]) -> SimulationResult {
        match *self {
            Discipline::Fcfs => Fcfs::new(processes).run(),
            Discipline::Sjf => Sjf::new(processes).run(),
            Discipline::Srtf => Srtf::new(processes).run(),
            Discipline::RoundRobin { quantum } => RoundRobin::new(processes, quantum).run(),
            Discipline::Mlfq { q0, q1 } => Mlfq::new(processes, q0, q1).run(),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Unknown discipline identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDisciplineError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseDisciplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scheduling discipline '{}' (expected FCFS, SJF, SRTF, RoundRobin or MLFQ)",
            self.input
        )
    }
}

impl std::error::Error for ParseDisciplineError {}

impl FromStr for Discipline {
    type Err = ParseDisciplineError;

    /// Parses an identifier (case-insensitive). Quantum disciplines get
    /// default quanta.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Discipline::Fcfs),
            "sjf" => Ok(Discipline::Sjf),
            "srtf" => Ok(Discipline::Srtf),
            "roundrobin" | "round-robin" | "rr" => Ok(Discipline::round_robin()),
            "mlfq" => Ok(Discipline::mlfq()),
            _ => Err(ParseDisciplineError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("FCFS".parse::<Discipline>(), Ok(Discipline::Fcfs));
        assert_eq!("sjf".parse::<Discipline>(), Ok(Discipline::Sjf));
        assert_eq!(" SRTF ".parse::<Discipline>(), Ok(Discipline::Srtf));
        assert_eq!(
            "RoundRobin".parse::<Discipline>(),
            Ok(Discipline::RoundRobin { quantum: 2 })
        );
        assert_eq!("rr".parse::<Discipline>(), Ok(Discipline::round_robin()));
        assert_eq!(
            "MLFQ".parse::<Discipline>(),
            Ok(Discipline::Mlfq { q0: 2, q1: 4 })
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lottery".parse::<Discipline>().unwrap_err();
        assert_eq!(err.input, "lottery");
        assert!(err.to_string().contains("lottery"));
    }

    #[test]
    fn test_identifier_round_trips_through_parse() {
        for d in [
            Discipline::Fcfs,
            Discipline::Sjf,
            Discipline::Srtf,
            Discipline::round_robin(),
            Discipline::mlfq(),
        ] {
            assert_eq!(d.identifier().parse::<Discipline>(), Ok(d));
        }
    }

    #[test]
    fn test_display_names_clamp() {
        assert_eq!(
            Discipline::RoundRobin { quantum: 0 }.display_name(),
            "Round Robin (Q=1)"
        );
        assert_eq!(
            Discipline::Mlfq { q0: -3, q1: 6 }.to_string(),
            "MLFQ [Q0=1, Q1=6, Q2=FCFS]"
        );
        assert_eq!(
            Discipline::Fcfs.display_name(),
            "First Come First Served (FCFS)"
        );
    }

    #[test]
    fn test_preemptive() {
        assert!(!Discipline::Fcfs.is_preemptive());
        assert!(!Discipline::Sjf.is_preemptive());
        assert!(Discipline::Srtf.is_preemptive());
        assert!(Discipline::mlfq().is_preemptive());
    }

    #[test]
    fn test_serde_tagged() {
        let d: Discipline = serde_json::from_str(r#"{"kind":"RoundRobin","quantum":3}"#).unwrap();
        assert_eq!(d, Discipline::RoundRobin { quantum: 3 });

        let d: Discipline = serde_json::from_str(r#"{"kind":"MLFQ"}"#).unwrap();
        assert_eq!(d, Discipline::Mlfq { q0: 2, q1: 4 });

        let d: Discipline = serde_json::from_str(r#"{"kind":"FCFS"}"#).unwrap();
        assert_eq!(d, Discipline::Fcfs);

        let json = serde_json::to_string(&Discipline::Sjf).unwrap();
        assert_eq!(json, r#"{"kind":"SJF"}"#);
    }
}
