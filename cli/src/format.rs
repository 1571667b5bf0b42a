//! Console output formatting

use panel_domain::evaluation::RecordOrigin;
use panel_domain::{ValidationOutcome, ValidationResult};
use std::fmt::Write;

pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full report: verdict, cluster breakdown, weak areas, synthesis.
    pub fn format(result: &ValidationResult) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "+============================================================+");
        let _ = writeln!(out, "|  Validation Report: {:<38} |", truncate(&result.proposal_name, 38));
        let _ = writeln!(out, "+============================================================+");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Overall: {:.1}/100  [{}]  ({})",
            result.overall_score,
            result.outcome.label(),
            result.maturity
        );
        let _ = writeln!(out, "Consensus: {:.2}", result.consensus);
        let _ = writeln!(
            out,
            "Specialists: {} consulted, {} fallback, in {:.1}s",
            result.specialists_consulted,
            count_fallbacks(result),
            result.processing_time_ms as f64 / 1000.0
        );

        if let Some(error) = &result.error {
            let _ = writeln!(out);
            let _ = writeln!(out, "NOTE: {error}");
        }

        if !result.cluster_scores.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Cluster scores:");
            for (cluster, score) in &result.cluster_scores {
                let _ = writeln!(
                    out,
                    "  {:<24} {:>5.1}  [{}]",
                    cluster,
                    score,
                    ValidationOutcome::from_score(*score).label()
                );
            }
        }

        if !result.weak_areas.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Weakest areas:");
            for area in &result.weak_areas {
                let _ = writeln!(
                    out,
                    "  {:>5.1}  {} ({})",
                    area.score, area.sub_parameter, area.cluster
                );
            }
        }

        for (title, items) in [
            ("Insights", &result.insights),
            ("Key recommendations", &result.key_recommendations),
            ("Critical risks", &result.critical_risks),
        ] {
            if !items.is_empty() {
                let _ = writeln!(out);
                let _ = writeln!(out, "{title}:");
                for item in items {
                    let _ = writeln!(out, "  - {item}");
                }
            }
        }

        out
    }

    /// Verdict and headline numbers only.
    pub fn format_summary(result: &ValidationResult) -> String {
        format!(
            "{}: {:.1}/100 [{}] consensus {:.2} ({} specialists, run {})",
            result.proposal_name,
            result.overall_score,
            result.outcome.label(),
            result.consensus,
            result.specialists_consulted,
            result.run_id
        )
    }

    /// Pretty-printed JSON of the whole result.
    pub fn format_json(result: &ValidationResult) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
    }
}

fn count_fallbacks(result: &ValidationResult) -> usize {
    result
        .records
        .values()
        .flat_map(|c| c.values())
        .flat_map(|p| p.values())
        .filter(|r| r.origin == RecordOrigin::Fallback)
        .count()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
