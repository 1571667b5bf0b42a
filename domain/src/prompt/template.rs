//! Prompt construction for specialist invocations.
//!
//! Pure string assembly. The system prompt carries the specialist's persona;
//! the user prompt carries the proposal, the scoring rubric, the dependency
//! context, and the required output contract.

use crate::core::proposal::Proposal;
use crate::specialist::Specialist;
use std::fmt::Write;

/// Condensed upstream evaluation passed into a dependent specialist's
/// prompt. Score and explanation only; full records never cross prompts.
#[derive(Debug, Clone)]
pub struct DependencySummary {
    pub sub_parameter: String,
    pub score: f64,
    pub explanation: String,
}

const RUBRIC: &str = "\
Scoring rubric (0-100):
- 90-100: Exceptional. Clear evidence, strong differentiation, minimal open risk.
- 75-89: Strong. Solid fundamentals with identified but manageable gaps.
- 60-74: Adequate. Workable, yet significant aspects remain unproven.
- 40-59: Questionable. Major gaps or unvalidated assumptions dominate.
- 20-39: Weak. Fundamental problems in this dimension.
- 0-19: Not viable as proposed.";

const OUTPUT_CONTRACT: &str = r#"Respond with a single JSON object and nothing else:
{
  "score": <number 0-100>,
  "confidence_level": <number 0.0-1.0>,
  "explanation": "<2-3 sentence justification>",
  "strengths": ["<item>", "<item>"],
  "weaknesses": ["<item>", "<item>"],
  "key_insights": ["<item>", "<item>"],
  "recommendations": ["<item>", "<item>"],
  "risk_factors": ["<item>"],
  "assumptions": ["<item>"]
}
Every list must contain at least two entries except risk_factors and assumptions."#;

pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt: role, goal, and cluster-specific backstory.
    pub fn specialist_system(specialist: &Specialist) -> String {
        format!(
            "You are a {}.\n\n{}\n\nYour goal: {}",
            specialist.role(),
            specialist.backstory(),
            specialist.goal()
        )
    }

    /// User prompt: proposal, rubric, dependency context, output contract.
    pub fn specialist_prompt(
        specialist: &Specialist,
        proposal: &Proposal,
        dependencies: &[DependencySummary],
    ) -> String {
        let mut prompt = String::with_capacity(1024);

        let _ = write!(
            prompt,
            "Evaluate the {} of the following startup proposal. This dimension \
             carries a weight of {:.0} within the {} assessment.\n\n\
             Proposal: {}\nConcept: {}\n\n{RUBRIC}\n",
            specialist.sub_parameter(),
            specialist.weight(),
            specialist.parameter(),
            proposal.name(),
            proposal.concept(),
        );

        if !dependencies.is_empty() {
            prompt.push_str("\nUpstream specialist findings to take into account:\n");
            for dep in dependencies {
                let _ = writeln!(
                    prompt,
                    "- {} scored {:.0}: {}",
                    dep.sub_parameter, dep.score, dep.explanation
                );
            }
        }

        let _ = write!(prompt, "\n{OUTPUT_CONTRACT}");
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specialist() -> Specialist {
        Specialist::new(
            "s001_originality",
            "Core Idea",
            "Novelty & Uniqueness",
            "Originality",
            25.0,
            vec!["Innovation Index".to_string()],
        )
    }

    fn proposal() -> Proposal {
        Proposal::new("AgriSense", "Soil sensors with ML irrigation advice").unwrap()
    }

    #[test]
    fn test_system_prompt_carries_persona() {
        let system = PromptTemplate::specialist_system(&specialist());
        assert!(system.contains("Originality Validation Specialist"));
        assert!(system.contains("innovation consultant"));
        assert!(system.contains("Core Idea"));
    }

    #[test]
    fn test_prompt_without_dependencies() {
        let prompt = PromptTemplate::specialist_prompt(&specialist(), &proposal(), &[]);
        assert!(prompt.contains("AgriSense"));
        assert!(prompt.contains("Soil sensors"));
        assert!(prompt.contains("weight of 25"));
        assert!(prompt.contains("Scoring rubric"));
        assert!(prompt.contains("\"score\""));
        assert!(!prompt.contains("Upstream specialist findings"));
    }

    #[test]
    fn test_prompt_embeds_dependency_summaries() {
        let deps = vec![DependencySummary {
            sub_parameter: "Innovation Index".to_string(),
            score: 72.0,
            explanation: "Moderately novel sensor stack".to_string(),
        }];
        let prompt = PromptTemplate::specialist_prompt(&specialist(), &proposal(), &deps);
        assert!(prompt.contains("Innovation Index scored 72"));
        assert!(prompt.contains("Moderately novel sensor stack"));
    }
}
