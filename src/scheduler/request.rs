//! Simulation request: the process list plus the chosen discipline.

use log::warn;
use serde::{Deserialize, Serialize};

use super::Discipline;
use crate::models::{ProcessDescriptor, SimulationResult};
use crate::validation::{validate_processes, ValidationError};

/// Input container for one simulation.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::{simulate, Discipline, SimulationRequest};
///
/// let request = SimulationRequest::new(Discipline::Fcfs)
///     .with_process(ProcessDescriptor::new("P1", 0, 5))
///     .with_process(ProcessDescriptor::new("P2", 1, 3));
///
/// let result = simulate(&request).unwrap();
/// assert_eq!(result.timeline.summary(), "P1:0-5 P2:5-8");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in caller order.
    pub processes: Vec<ProcessDescriptor>,
    /// Discipline to simulate.
    pub discipline: Discipline,
}

impl SimulationRequest {
    /// Creates an empty request for a discipline.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            processes: Vec::new(),
            discipline,
        }
    }

    /// Appends a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the process list.
    pub fn with_processes(mut self, processes: Vec<ProcessDescriptor>) -> Self {
        self.processes = processes;
        self
    }

    /// Sets the discipline.
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }
}

/// Validates a request and runs it.
///
/// # Returns
/// The simulation result, or every validation problem found.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, Vec<ValidationError>> {
    if let Err(errors) = validate_processes(&request.processes) {
        warn!(
            "rejected {} request: {} validation errors",
            request.discipline.identifier(),
            errors.len()
        );
        return Err(errors);
    }
    Ok(request.discipline.simulate(&request.processes))
}

/// Parses a user-entered quantum leniently.
///
/// Blank or non-numeric text yields `default`; numbers are clamped to
/// at least one.
pub fn parse_quantum(text: &str, default: i64) -> i64 {
    let text = text.trim();
    if text.is_empty() {
        return default;
    }
    text.parse::<i64>().map(|q| q.max(1)).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_simulate_valid_request() {
        let request = SimulationRequest::new(Discipline::Srtf).with_processes(vec![
            ProcessDescriptor::new("P1", 0, 8),
            ProcessDescriptor::new("P2", 1, 4),
            ProcessDescriptor::new("P3", 2, 9),
            ProcessDescriptor::new("P4", 3, 5),
        ]);
        let result = simulate(&request).unwrap();
        assert!((result.average_wait - 6.5).abs() < 1e-10);
        assert_eq!(result.discipline, "Shortest Remaining Time First (SRTF)");
    }

    #[test]
    fn test_simulate_rejects_empty() {
        let request = SimulationRequest::new(Discipline::Fcfs);
        let errors = simulate(&request).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessList);
    }

    #[test]
    fn test_simulate_rejects_bad_burst() {
        let request = SimulationRequest::new(Discipline::mlfq())
            .with_process(ProcessDescriptor::new("P1", 0, 0));
        let errors = simulate(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_with_discipline() {
        let request = SimulationRequest::new(Discipline::Fcfs)
            .with_process(ProcessDescriptor::new("A", 0, 3))
            .with_discipline(Discipline::RoundRobin { quantum: 1 });
        let result = simulate(&request).unwrap();
        assert_eq!(result.timeline.len(), 3);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"name": "P1", "arrival": 0, "burst": 5},
                {"name": "P2", "arrival": 1, "burst": 3},
                {"name": "P3", "arrival": 2, "burst": 8}
            ],
            "discipline": {"kind": "RoundRobin", "quantum": 2}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.processes.len(), 3);
        let result = simulate(&request).unwrap();
        assert_eq!(result.timeline.entries[1].name, "P2");
        assert_eq!(result.discipline, "Round Robin (Q=2)");
    }

    #[test]
    fn test_result_serializes() {
        let request = SimulationRequest::new(Discipline::mlfq())
            .with_process(ProcessDescriptor::new("A", 0, 3));
        let result = simulate(&request).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["timeline"]["entries"][0]["level"], 0);
        assert_eq!(value["colors"][0]["color"]["r"], 231);
    }

    #[test]
    fn test_parse_quantum() {
        assert_eq!(parse_quantum("", 2), 2);
        assert_eq!(parse_quantum("   ", 4), 4);
        assert_eq!(parse_quantum("abc", 2), 2);
        assert_eq!(parse_quantum("0", 2), 1);
        assert_eq!(parse_quantum("-7", 2), 1);
        assert_eq!(parse_quantum(" 5 ", 2), 5);
    }
}
