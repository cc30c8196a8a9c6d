//! CPU scheduling domain models.
//!
//! Provides the data contracts shared by every discipline: the caller's
//! process descriptors, the per-run working records, the Gantt timeline
//! and the final simulation result.
//!
//! # Lifecycle
//!
//! | Type | Owner | Mutability |
//! |------|-------|-----------|
//! | `ProcessDescriptor` | Caller | Immutable |
//! | `ProcessRecord` | One discipline run | Mutated during the run |
//! | `Timeline` | One discipline run | Append-only |
//! | `SimulationResult` | Caller | Immutable |

mod process;
mod result;
mod timeline;

pub use process::{working_copy, ProcessDescriptor, ProcessNamer, ProcessRecord};
pub use result::{ColorAssignment, ProcessStats, Rgb, SimulationResult, GANTT_PALETTE};
pub use timeline::{IdleGap, Timeline, TimelineEntry};
