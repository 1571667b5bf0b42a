//! Pure domain logic for the evaluation panel.
//!
//! No I/O, no logging, no async. Everything here is deterministic given its
//! inputs; the application layer supplies time, concurrency, and the
//! inference service.

pub mod aggregate;
pub mod core;
pub mod evaluation;
pub mod planner;
pub mod prompt;
pub mod specialist;

pub use aggregate::{ValidationOutcome, ValidationResult};
pub use core::error::DomainError;
pub use core::proposal::Proposal;
pub use evaluation::{EvaluationRecord, RecordOrigin};
pub use planner::{ExecutionPlan, plan_waves};
pub use specialist::{Specialist, SpecialistRegistry};
