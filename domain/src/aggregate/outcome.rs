//! Outcome classification.
//!
//! The single place where overall scores map to a verdict. Everything that
//! needs a band (result summary, maturity estimate, console formatting)
//! derives it from here so the cutoffs can never drift apart.

use serde::{Deserialize, Serialize};

/// Verdict band for an overall validation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Excellent,
    Good,
    Moderate,
    Weak,
}

impl ValidationOutcome {
    /// Classify a 0-100 overall score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }

    /// Human-readable maturity tier derived from the same banding.
    pub fn maturity(&self) -> &'static str {
        match self {
            Self::Excellent => "Investment ready",
            Self::Good => "Market ready with refinements",
            Self::Moderate => "Development stage",
            Self::Weak => "Early concept stage",
        }
    }
}
