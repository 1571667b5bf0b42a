//! Result aggregation.
//!
//! Pure function from a batch of evaluation records to a
//! [`ValidationResult`]. Cluster scores are plain arithmetic means; the
//! overall score is either the mean of cluster scores or, when the caller
//! supplied cluster weights, a weighted mean normalized by the sum of the
//! weights in use. Per-specialist weights are catalog metadata and do not
//! enter any average.

use super::outcome::ValidationOutcome;
use super::result::{RecordTree, ValidationResult, WeakArea, new_run_id};
use crate::evaluation::EvaluationRecord;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

const WEAK_AREA_THRESHOLD: f64 = 60.0;
const WEAK_AREA_CAP: usize = 5;
const SYNTHESIS_CAP: usize = 10;
const HIGH_BAND: f64 = 75.0;
const LOW_BAND: f64 = 45.0;

/// Aggregate a completed run's records into the final result.
///
/// Deterministic given the same records, weights, and timestamp. An empty
/// batch degrades to a neutral fallback result rather than dividing by zero.
pub fn aggregate(
    proposal_name: &str,
    records: Vec<EvaluationRecord>,
    cluster_weights: &BTreeMap<String, f64>,
    processing_time_ms: u64,
    now: DateTime<Utc>,
) -> ValidationResult {
    if records.is_empty() {
        return fallback_result(proposal_name, "no evaluations produced", processing_time_ms, now);
    }

    let cluster_scores = compute_cluster_scores(&records);
    let overall = overall_score(&cluster_scores, cluster_weights);
    let outcome = ValidationOutcome::from_score(overall);
    let all_scores: Vec<f64> = records.iter().map(|r| r.score).collect();

    let insights = build_insights(&records, &cluster_scores);
    let weak_areas = weak_areas(&records);
    let key_recommendations = synthesize(&records, |r| r.recommendations.clone());
    let critical_risks = synthesize(&records, |r| {
        let mut items = r.risk_factors.clone();
        if r.score < 50.0 {
            items.extend(r.weaknesses.iter().cloned());
        }
        items
    });

    let specialists_consulted = records.len();

    ValidationResult {
        run_id: new_run_id(now),
        timestamp: now,
        proposal_name: proposal_name.to_string(),
        overall_score: overall,
        outcome,
        maturity: outcome.maturity().to_string(),
        cluster_scores,
        consensus: consensus(&all_scores),
        records: build_tree(records),
        insights,
        weak_areas,
        key_recommendations,
        critical_risks,
        specialists_consulted,
        processing_time_ms,
        error: None,
    }
}

/// Neutral result for a run that could not be completed at all.
pub fn fallback_result(
    proposal_name: &str,
    reason: &str,
    processing_time_ms: u64,
    now: DateTime<Utc>,
) -> ValidationResult {
    let outcome = ValidationOutcome::from_score(50.0);
    ValidationResult {
        run_id: new_run_id(now),
        timestamp: now,
        proposal_name: proposal_name.to_string(),
        overall_score: 50.0,
        outcome,
        maturity: outcome.maturity().to_string(),
        cluster_scores: BTreeMap::new(),
        consensus: 0.0,
        records: RecordTree::new(),
        insights: vec![format!("Validation could not be completed: {reason}")],
        weak_areas: Vec::new(),
        key_recommendations: vec!["Re-run the validation once the panel is reachable".to_string()],
        critical_risks: Vec::new(),
        specialists_consulted: 0,
        processing_time_ms,
        error: Some(reason.to_string()),
    }
}

/// Consensus metric: 1 minus the coefficient of variation, clamped to [0, 1].
///
/// Fewer than two scores is trivially consensual. A zero mean makes the
/// coefficient undefined; by convention that is 1.0 when all scores are
/// equal and 0.0 otherwise.
pub fn consensus(scores: &[f64]) -> f64 {
    if scores.len() < 2 {
        return 1.0;
    }

    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if mean == 0.0 {
        return if std_dev == 0.0 { 1.0 } else { 0.0 };
    }

    (1.0 - std_dev / mean).clamp(0.0, 1.0)
}

fn compute_cluster_scores(records: &[EvaluationRecord]) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = sums.entry(r.cluster.clone()).or_insert((0.0, 0));
        entry.0 += r.score;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(cluster, (sum, count))| (cluster, sum / count as f64))
        .collect()
}

fn overall_score(cluster_scores: &BTreeMap<String, f64>, weights: &BTreeMap<String, f64>) -> f64 {
    if cluster_scores.is_empty() {
        return 50.0;
    }

    if weights.is_empty() {
        return cluster_scores.values().sum::<f64>() / cluster_scores.len() as f64;
    }

    // Clusters without an explicit weight carry weight 1.
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (cluster, score) in cluster_scores {
        let w = weights.get(cluster).copied().unwrap_or(1.0);
        weighted_sum += score * w;
        weight_sum += w;
    }

    if weight_sum == 0.0 {
        cluster_scores.values().sum::<f64>() / cluster_scores.len() as f64
    } else {
        weighted_sum / weight_sum
    }
}

fn build_tree(records: Vec<EvaluationRecord>) -> RecordTree {
    let mut tree = RecordTree::new();
    for r in records {
        tree.entry(r.cluster.clone())
            .or_default()
            .entry(r.parameter.clone())
            .or_default()
            .insert(r.sub_parameter.clone(), r);
    }
    tree
}

fn build_insights(records: &[EvaluationRecord], cluster_scores: &BTreeMap<String, f64>) -> Vec<String> {
    let total = records.len();
    let high = records.iter().filter(|r| r.score >= HIGH_BAND).count();
    let low = records.iter().filter(|r| r.score <= LOW_BAND).count();
    let medium = total - high - low;

    let mut insights = Vec::new();
    if high > 0 {
        insights.push(format!(
            "{high} of {total} dimensions scored {HIGH_BAND:.0} or higher, anchoring the proposal's strengths"
        ));
    }
    if low > 0 {
        insights.push(format!(
            "{low} of {total} dimensions scored {LOW_BAND:.0} or lower and require immediate attention"
        ));
    }
    if medium > 0 && high > 0 && low > 0 {
        insights.push(format!(
            "Mixed signals across {medium} mid-range dimensions suggest the concept needs focused refinement"
        ));
    }

    if cluster_scores.len() >= 2 {
        // max_by on f64 keys is fine here because scores are finite.
        if let Some((name, score)) = cluster_scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
        {
            insights.push(format!("Strongest cluster: {name} ({score:.1})"));
        }
        if let Some((name, score)) = cluster_scores
            .iter()
            .min_by(|a, b| a.1.total_cmp(b.1))
        {
            insights.push(format!("Weakest cluster: {name} ({score:.1})"));
        }
    }

    insights
}

fn weak_areas(records: &[EvaluationRecord]) -> Vec<WeakArea> {
    let mut areas: Vec<WeakArea> = records
        .iter()
        .filter(|r| r.score < WEAK_AREA_THRESHOLD)
        .map(|r| WeakArea {
            sub_parameter: r.sub_parameter.clone(),
            cluster: r.cluster.clone(),
            score: r.score,
        })
        .collect();
    areas.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.sub_parameter.cmp(&b.sub_parameter)));
    areas.truncate(WEAK_AREA_CAP);
    areas
}

/// Deduplicate and prioritize free-text items across records.
///
/// Each occurrence contributes urgency proportional to how weak its source
/// record scored, so items repeated by low-scoring specialists rise to the
/// top. Ties break alphabetically for determinism.
fn synthesize(
    records: &[EvaluationRecord],
    extract: impl Fn(&EvaluationRecord) -> Vec<String>,
) -> Vec<String> {
    let mut priorities: HashMap<String, (String, f64)> = HashMap::new();
    for r in records {
        for item in extract(r) {
            let trimmed = item.trim();
            if trimmed.is_empty() {
                continue;
            }
            let entry = priorities
                .entry(trimmed.to_lowercase())
                .or_insert_with(|| (trimmed.to_string(), 0.0));
            entry.1 += 100.0 - r.score;
        }
    }

    let mut ranked: Vec<(String, f64)> = priorities.into_values().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(SYNTHESIS_CAP);
    ranked.into_iter().map(|(item, _)| item).collect()
}
