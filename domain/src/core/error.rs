//! Domain error types

use thiserror::Error;

/// Domain-level errors.
///
/// Everything here is a *configuration* failure detected at process start.
/// Per-specialist failures during a run are never errors — they resolve to
/// fallback records instead.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Specialist catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate specialist id: {0}")]
    DuplicateSpecialist(String),

    #[error("Dependency cycle involving sub-parameters: {0}")]
    DependencyCycle(String),

    #[error("Invalid proposal: {0}")]
    InvalidProposal(String),
}
