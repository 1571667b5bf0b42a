//! Specialist entity
//!
//! A specialist is a statically configured evaluator of exactly one
//! sub-parameter. Specialists are created once at process start from the
//! catalog and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One evaluation specialist in the panel.
///
/// Dependencies reference sub-parameter *names*, not specialist ids — a
/// loose, string-based coupling resolved once at registry build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    id: String,
    cluster: String,
    parameter: String,
    sub_parameter: String,
    weight: f64,
    dependencies: Vec<String>,
}

impl Specialist {
    pub fn new(
        id: impl Into<String>,
        cluster: impl Into<String>,
        parameter: impl Into<String>,
        sub_parameter: impl Into<String>,
        weight: f64,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            cluster: cluster.into(),
            parameter: parameter.into(),
            sub_parameter: sub_parameter.into(),
            weight,
            dependencies,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn sub_parameter(&self) -> &str {
        &self.sub_parameter
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Role line used when prompting the inference service.
    pub fn role(&self) -> String {
        format!("{} Validation Specialist", self.sub_parameter)
    }

    /// Goal text embedded in the system prompt.
    pub fn goal(&self) -> String {
        format!(
            "Provide expert evaluation of {} for startup proposals with precise scoring \
             (0-100 scale), concise bullet-point analysis, and actionable insights within \
             the {} evaluation framework. Be critical and rigorous: challenge assumptions, \
             identify weaknesses, and do not hesitate to give low scores to weak proposals.",
            self.sub_parameter, self.cluster
        )
    }

    /// Backstory text for the system prompt, keyed by cluster.
    pub fn backstory(&self) -> String {
        let base = match self.cluster.as_str() {
            "Core Idea" => {
                "You are a seasoned innovation consultant with deep expertise in evaluating \
                 breakthrough ideas and disruptive technologies. You have assessed hundreds of \
                 startups and are known for rigorous, critical analysis."
            }
            "Market Opportunity" => {
                "You are a market research expert with extensive experience in startup \
                 ecosystems. You understand market dynamics, customer behavior, and growth \
                 potential in emerging markets."
            }
            "Execution" => {
                "You are a technical and operational expert who has guided numerous startups \
                 through execution challenges. You understand the complexities of building and \
                 scaling technology solutions."
            }
            "Business Model" => {
                "You are a business strategy expert with deep knowledge of sustainable business \
                 models and financial viability, with experience in venture capital and startup \
                 valuations."
            }
            "Team" => {
                "You are an organizational development expert who understands what makes \
                 high-performing teams, with experience in founder coaching and team building \
                 for startups."
            }
            "Compliance" => {
                "You are a regulatory and compliance expert with specialized knowledge of \
                 business regulation, ESG principles, and ecosystem dynamics."
            }
            "Risk & Strategy" => {
                "You are a strategic risk assessment expert who helps startups navigate \
                 uncertainties and position themselves for investment and growth."
            }
            _ => "You are a specialized validation expert with deep domain knowledge.",
        };

        format!(
            "{} Your specific expertise lies in {} evaluation, and you collaborate with \
             other specialists to provide comprehensive assessments. You challenge other \
             experts when their conclusions are not supported by the evidence.",
            base, self.sub_parameter
        )
    }
}
