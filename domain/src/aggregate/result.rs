//! Validation result types.
//!
//! The serializable end product of a run. The record tree is keyed by
//! BTreeMaps so serialization order is (cluster, parameter, sub-parameter),
//! never arrival order.

use super::outcome::ValidationOutcome;
use crate::evaluation::EvaluationRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// cluster -> parameter -> sub-parameter -> record.
pub type RecordTree = BTreeMap<String, BTreeMap<String, BTreeMap<String, EvaluationRecord>>>;

/// A sub-parameter flagged as weak (score below 60).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakArea {
    pub sub_parameter: String,
    pub cluster: String,
    pub score: f64,
}

/// The complete outcome of validating one proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub run_id: String,
    pub timestamp: DateTime<Utc>,
    pub proposal_name: String,
    pub overall_score: f64,
    pub outcome: ValidationOutcome,
    pub maturity: String,
    pub cluster_scores: BTreeMap<String, f64>,
    pub consensus: f64,
    pub records: RecordTree,
    pub insights: Vec<String>,
    pub weak_areas: Vec<WeakArea>,
    pub key_recommendations: Vec<String>,
    pub critical_risks: Vec<String>,
    pub specialists_consulted: usize,
    pub processing_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn is_fallback(&self) -> bool {
        self.error.is_some() && self.records.is_empty()
    }
}

/// Run identifier: `VAL_` plus the unix timestamp of the moment of creation.
pub fn new_run_id(now: DateTime<Utc>) -> String {
    format!("VAL_{}", now.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_format() {
        let now = DateTime::from_timestamp(1_756_000_000, 0).unwrap();
        assert_eq!(new_run_id(now), "VAL_1756000000");
    }
}
