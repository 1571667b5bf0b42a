//! Specialist response parsing.
//!
//! Extracts a structured evaluation draft from free-form inference output.
//! Pure domain logic — no I/O, no session state, just text handling.
//!
//! Parsing order:
//! 1. JSON object embedded anywhere in the response, matched against the
//!    declared output schema.
//! 2. Best-effort text salvage: locate a `score: <n>` token and keep the
//!    leading text as the explanation.
//!
//! Either path clamps the score into [0, 100]. Responses on the legacy 0-5
//! scale (score ≤ 5) are normalized by ×20 before clamping.

use serde::Deserialize;

/// A parsed-but-not-yet-repaired evaluation.
///
/// `salvaged` is true when the structured parse failed or was incomplete and
/// text-pattern extraction filled the gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDraft {
    pub score: f64,
    pub confidence: f64,
    pub explanation: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub assumptions: Vec<String>,
    pub salvaged: bool,
}

/// Explanation fields sometimes arrive as a list of sentences.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    fn into_text(self) -> String {
        match self {
            TextOrList::Text(t) => t,
            TextOrList::List(items) => items
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .collect::<Vec<_>>()
                .join(". "),
        }
    }
}

/// The declared specialist output schema. Every field is optional; the
/// repair step guarantees the record invariants afterwards.
#[derive(Debug, Default, Deserialize)]
struct RawEvaluation {
    score: Option<f64>,
    confidence_level: Option<f64>,
    explanation: Option<TextOrList>,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default)]
    key_insights: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    risk_factors: Vec<String>,
    #[serde(default)]
    assumptions: Vec<String>,
}

/// Neutral score used when a response carries no usable score token.
const DEFAULT_SCORE: f64 = 60.0;
const DEFAULT_CONFIDENCE: f64 = 0.7;
const SALVAGE_CONFIDENCE: f64 = 0.6;

/// Parse a raw inference response into a draft.
///
/// Returns `None` only when the response is effectively empty; any other
/// text yields at least a salvaged draft.
pub fn parse_response(raw: &str) -> Option<ResponseDraft> {
    if raw.trim().is_empty() {
        return None;
    }

    if let Some(parsed) = parse_embedded_json(raw) {
        return Some(parsed);
    }

    Some(salvage_from_text(raw))
}

/// Normalize a raw score onto the 0-100 scale.
pub fn normalize_score(score: f64) -> f64 {
    let score = if score <= 5.0 { score * 20.0 } else { score };
    score.clamp(0.0, 100.0)
}

fn parse_embedded_json(raw: &str) -> Option<ResponseDraft> {
    let start = raw.find('{')?;
    let end = raw[start..].rfind('}')?;
    let json_str = &raw[start..start + end + 1];

    let parsed: RawEvaluation = serde_json::from_str(json_str).ok()?;

    // A JSON object without a score is incomplete; fall back to the text
    // salvage path so the score token search covers the whole response.
    let (score, salvaged) = match parsed.score {
        Some(s) => (normalize_score(s), false),
        None => (
            extract_score_token(raw).map_or(DEFAULT_SCORE, normalize_score),
            true,
        ),
    };

    Some(ResponseDraft {
        score,
        confidence: parsed
            .confidence_level
            .unwrap_or(DEFAULT_CONFIDENCE)
            .clamp(0.0, 1.0),
        explanation: parsed
            .explanation
            .map(TextOrList::into_text)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "Analysis completed".to_string()),
        strengths: clean(parsed.strengths),
        weaknesses: clean(parsed.weaknesses),
        key_insights: clean(parsed.key_insights),
        recommendations: clean(parsed.recommendations),
        risk_factors: clean(parsed.risk_factors),
        assumptions: clean(parsed.assumptions),
        salvaged,
    })
}

fn salvage_from_text(raw: &str) -> ResponseDraft {
    let score = extract_score_token(raw).map_or(DEFAULT_SCORE, normalize_score);

    let explanation: String = raw.trim().chars().take(200).collect();

    ResponseDraft {
        score,
        confidence: SALVAGE_CONFIDENCE,
        explanation,
        strengths: Vec::new(),
        weaknesses: Vec::new(),
        key_insights: Vec::new(),
        recommendations: Vec::new(),
        risk_factors: Vec::new(),
        assumptions: vec!["Extracted from text analysis".to_string()],
        salvaged: true,
    }
}

/// Locate a numeric token following the word "score" (case-insensitive).
fn extract_score_token(text: &str) -> Option<f64> {
    let lower = text.to_lowercase();
    let pos = lower.find("score")?;
    let rest = &lower[pos + "score".len()..];

    let number: String = rest
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    number.parse().ok()
}

fn clean(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_json() {
        let raw = r#"{"score": 82, "confidence_level": 0.9, "explanation": "Strong moat",
            "strengths": ["First mover"], "weaknesses": ["Capital heavy"],
            "key_insights": ["Niche is underserved"], "recommendations": ["Pilot first"]}"#;
        let draft = parse_response(raw).unwrap();

        assert_eq!(draft.score, 82.0);
        assert_eq!(draft.confidence, 0.9);
        assert_eq!(draft.explanation, "Strong moat");
        assert_eq!(draft.strengths, ["First mover".to_string()]);
        assert!(!draft.salvaged);
    }

    #[test]
    fn test_parse_json_embedded_in_prose() {
        let raw = r#"Here is my assessment:
```json
{"score": 74, "explanation": "Reasonable fit"}
```
Let me know if you need more detail."#;
        let draft = parse_response(raw).unwrap();
        assert_eq!(draft.score, 74.0);
        assert!(!draft.salvaged);
    }

    #[test]
    fn test_explanation_list_is_joined() {
        let raw = r#"{"score": 50, "explanation": ["First point", "Second point"]}"#;
        let draft = parse_response(raw).unwrap();
        assert_eq!(draft.explanation, "First point. Second point");
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let draft = parse_response(r#"{"score": 140, "explanation": "x"}"#).unwrap();
        assert_eq!(draft.score, 100.0);

        let draft = parse_response(r#"{"score": -10, "explanation": "x"}"#).unwrap();
        assert_eq!(draft.score, 0.0);
    }

    #[test]
    fn test_legacy_five_point_scale_normalized() {
        let draft = parse_response(r#"{"score": 3.5, "explanation": "old scale"}"#).unwrap();
        assert_eq!(draft.score, 70.0);
    }

    #[test]
    fn test_confidence_clamped() {
        let draft = parse_response(r#"{"score": 60, "confidence_level": 1.8}"#).unwrap();
        assert_eq!(draft.confidence, 1.0);
    }

    #[test]
    fn test_text_salvage_extracts_score_token() {
        let draft = parse_response("After careful review, Score: 72 out of 100.").unwrap();
        assert_eq!(draft.score, 72.0);
        assert!(draft.salvaged);
        assert!(draft.explanation.contains("careful review"));
    }

    #[test]
    fn test_text_without_score_defaults_to_neutral() {
        let draft = parse_response("The idea seems plausible but untested.").unwrap();
        assert_eq!(draft.score, 60.0);
        assert!(draft.salvaged);
    }

    #[test]
    fn test_json_without_score_uses_token_search() {
        let draft = parse_response(r#"score is 88 {"explanation": "missing score field"}"#).unwrap();
        assert_eq!(draft.score, 88.0);
        assert!(draft.salvaged);
    }

    #[test]
    fn test_empty_response_yields_none() {
        assert!(parse_response("").is_none());
        assert!(parse_response("   \n ").is_none());
    }

    #[test]
    fn test_malformed_json_falls_back_to_salvage() {
        let draft = parse_response(r#"{"score": 55, "explanation": unterminated"#).unwrap();
        assert!(draft.salvaged);
        assert_eq!(draft.score, 55.0);
    }

    #[test]
    fn test_blank_list_entries_dropped() {
        let raw = r#"{"score": 60, "strengths": ["  ", "Real strength", ""]}"#;
        let draft = parse_response(raw).unwrap();
        assert_eq!(draft.strengths, ["Real strength".to_string()]);
    }
}
