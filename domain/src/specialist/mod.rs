//! Specialist catalog, registry, and validation

pub mod catalog;
pub mod entities;
pub mod registry;
pub mod validation;

pub use entities::Specialist;
pub use registry::SpecialistRegistry;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
