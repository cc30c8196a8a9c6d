//! Input validation for simulation requests.
//!
//! The disciplines assume well-formed input and assert on violations, so
//! callers check process lists here first. Detects:
//! - Empty process lists
//! - Empty or duplicate names
//! - Negative arrival times
//! - Non-positive burst times
//!
//! All problems are collected rather than stopping at the first.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessDescriptor;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessList,
    /// A process has a blank name.
    EmptyName,
    /// Two processes share a name.
    DuplicateName,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Every name is non-blank
/// 3. No duplicate names
/// 4. Every arrival is >= 0
/// 5. Every burst is > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Add at least one process",
        )]);
    }

    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (row, p) in processes.iter().enumerate() {
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process #{} has an empty name", row + 1),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.name, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' burst must be > 0 (got {})", p.name, p.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
