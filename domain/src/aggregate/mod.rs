//! Aggregation of evaluation records into a final result

pub mod aggregator;
pub mod outcome;
pub mod result;

pub use aggregator::{aggregate, consensus, fallback_result};
pub use outcome::ValidationOutcome;
pub use result::{RecordTree, ValidationResult, WeakArea};
