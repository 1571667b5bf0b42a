//! Evaluation records.
//!
//! An [`EvaluationRecord`] is the finalized output of one specialist for one
//! run: score, confidence, narrative fields, and an origin tag stating how
//! trustworthy the data is. Records are the unit of aggregation; every
//! dispatched specialist yields exactly one, failures included.

use super::parsing::ResponseDraft;
use crate::specialist::Specialist;
use serde::{Deserialize, Serialize};

/// How the record's content came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrigin {
    /// Parsed cleanly from a structured response.
    Parsed,
    /// Parsed with help: text salvage, or placeholder entries synthesized
    /// for missing required lists.
    Repaired,
    /// The specialist never produced a usable response; content is neutral.
    Fallback,
}

/// One specialist's finalized evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub specialist_id: String,
    pub cluster: String,
    pub parameter: String,
    pub sub_parameter: String,
    /// Always within [0, 100].
    pub score: f64,
    /// Always within [0, 1].
    pub confidence: f64,
    pub explanation: String,
    /// Never empty after repair.
    pub strengths: Vec<String>,
    /// Never empty after repair.
    pub weaknesses: Vec<String>,
    /// Never empty after repair.
    pub key_insights: Vec<String>,
    /// Never empty after repair.
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub assumptions: Vec<String>,
    pub origin: RecordOrigin,
    pub elapsed_ms: u64,
}

impl EvaluationRecord {
    /// Finalize a parsed draft into a record.
    ///
    /// The four required lists (strengths, weaknesses, key insights,
    /// recommendations) are guaranteed non-empty: any empty one is filled
    /// with deterministic placeholders naming the sub-parameter, and the
    /// record is tagged `Repaired`.
    pub fn from_draft(specialist: &Specialist, mut draft: ResponseDraft, elapsed_ms: u64) -> Self {
        let sub = specialist.sub_parameter();
        let mut repaired = draft.salvaged;

        for (list, placeholders) in [
            (&mut draft.strengths, strength_placeholders(sub)),
            (&mut draft.weaknesses, weakness_placeholders(sub)),
            (&mut draft.key_insights, insight_placeholders(sub)),
            (&mut draft.recommendations, recommendation_placeholders(sub)),
        ] {
            if list.is_empty() {
                *list = placeholders;
                repaired = true;
            }
        }

        Self {
            specialist_id: specialist.id().to_string(),
            cluster: specialist.cluster().to_string(),
            parameter: specialist.parameter().to_string(),
            sub_parameter: sub.to_string(),
            score: draft.score,
            confidence: draft.confidence,
            explanation: draft.explanation,
            strengths: draft.strengths,
            weaknesses: draft.weaknesses,
            key_insights: draft.key_insights,
            recommendations: draft.recommendations,
            risk_factors: draft.risk_factors,
            assumptions: draft.assumptions,
            origin: if repaired {
                RecordOrigin::Repaired
            } else {
                RecordOrigin::Parsed
            },
            elapsed_ms,
        }
    }

    /// Neutral record for a specialist that produced nothing usable.
    ///
    /// Score 50, confidence 0.5; the failure reason lands in the
    /// explanation and risk factors so it survives aggregation.
    pub fn fallback(specialist: &Specialist, reason: &str, elapsed_ms: u64) -> Self {
        let sub = specialist.sub_parameter();
        Self {
            specialist_id: specialist.id().to_string(),
            cluster: specialist.cluster().to_string(),
            parameter: specialist.parameter().to_string(),
            sub_parameter: sub.to_string(),
            score: 50.0,
            confidence: 0.5,
            explanation: format!("Evaluation of {sub} could not be completed: {reason}"),
            strengths: strength_placeholders(sub),
            weaknesses: weakness_placeholders(sub),
            key_insights: insight_placeholders(sub),
            recommendations: recommendation_placeholders(sub),
            risk_factors: vec![format!("Assessment incomplete for {sub}: {reason}")],
            assumptions: vec!["Neutral assessment in absence of specialist output".to_string()],
            origin: RecordOrigin::Fallback,
            elapsed_ms,
        }
    }
}

fn strength_placeholders(sub: &str) -> Vec<String> {
    vec![
        format!("Foundational framework for {sub} established"),
        format!("Initial assessment of {sub} feasibility completed"),
    ]
}

fn weakness_placeholders(sub: &str) -> Vec<String> {
    vec![
        format!("Limited validation data available for {sub}"),
        format!("Potential scalability challenges in {sub}"),
    ]
}

fn insight_placeholders(sub: &str) -> Vec<String> {
    vec![
        format!("{sub} requires deeper market analysis"),
        format!("Competitive context is critical for {sub}"),
    ]
}

fn recommendation_placeholders(sub: &str) -> Vec<String> {
    vec![
        format!("Validate {sub} assumptions through targeted research"),
        format!("Benchmark {sub} against established competitors"),
    ]
}
