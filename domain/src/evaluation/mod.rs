//! Evaluation parsing and records

pub mod parsing;
pub mod record;

pub use parsing::{ResponseDraft, parse_response};
pub use record::{EvaluationRecord, RecordOrigin};
