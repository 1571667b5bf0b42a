//! Invoke Specialist use case
//!
//! Runs a single specialist against the inference gateway and always
//! produces a record. Failures of any kind (gateway errors, timeouts,
//! unparseable output, cancellation) degrade to a fallback record; errors
//! never propagate out of this function.

use crate::config::ExecutionParams;
use crate::ports::inference::{CompletionRequest, InferenceGateway};
use panel_domain::evaluation::{EvaluationRecord, parse_response};
use panel_domain::prompt::{DependencySummary, PromptTemplate};
use panel_domain::{Proposal, Specialist};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Invoke one specialist for one proposal.
///
/// `remaining` is the time left until the run deadline; the effective
/// timeout is the smaller of it and the per-specialist timeout.
pub async fn invoke_specialist<G: InferenceGateway>(
    gateway: &G,
    specialist: &Specialist,
    proposal: &Proposal,
    dependencies: &[DependencySummary],
    params: &ExecutionParams,
    remaining: Duration,
    cancel: &CancellationToken,
) -> EvaluationRecord {
    let started = Instant::now();
    let elapsed_ms = |started: Instant| started.elapsed().as_millis() as u64;

    if remaining.is_zero() {
        return EvaluationRecord::fallback(specialist, "run deadline exceeded", 0);
    }
    if cancel.is_cancelled() {
        return EvaluationRecord::fallback(specialist, "run cancelled", 0);
    }

    let request = CompletionRequest {
        system: PromptTemplate::specialist_system(specialist),
        prompt: PromptTemplate::specialist_prompt(specialist, proposal, dependencies),
        max_tokens: params.max_tokens,
        temperature: params.temperature,
    };

    let timeout = params.specialist_timeout.min(remaining);
    debug!(
        specialist = specialist.id(),
        timeout_secs = timeout.as_secs(),
        deps = dependencies.len(),
        "dispatching specialist"
    );

    let response = tokio::select! {
        _ = cancel.cancelled() => {
            warn!(specialist = specialist.id(), "invocation cancelled");
            return EvaluationRecord::fallback(specialist, "run cancelled", elapsed_ms(started));
        }
        outcome = tokio::time::timeout(timeout, gateway.complete(request)) => match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(specialist = specialist.id(), error = %e, "gateway call failed");
                return EvaluationRecord::fallback(
                    specialist,
                    &format!("gateway call failed: {e}"),
                    elapsed_ms(started),
                );
            }
            Err(_) => {
                warn!(
                    specialist = specialist.id(),
                    timeout_secs = timeout.as_secs(),
                    "invocation timed out"
                );
                return EvaluationRecord::fallback(
                    specialist,
                    &format!("timed out after {}s", timeout.as_secs()),
                    elapsed_ms(started),
                );
            }
        },
    };

    match parse_response(&response) {
        Some(draft) => EvaluationRecord::from_draft(specialist, draft, elapsed_ms(started)),
        None => {
            warn!(specialist = specialist.id(), "empty response from gateway");
            EvaluationRecord::fallback(specialist, "empty response", elapsed_ms(started))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inference::InferenceError;
    use async_trait::async_trait;
    use panel_domain::RecordOrigin;
    use std::sync::Mutex;

    struct FixedGateway {
        response: String,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl FixedGateway {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl InferenceGateway for FixedGateway {
        async fn complete(&self, request: CompletionRequest) -> Result<String, InferenceError> {
            self.requests.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl InferenceGateway for FailingGateway {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, InferenceError> {
            Err(InferenceError::ConnectionError("refused".to_string()))
        }
    }

    struct HangingGateway;

    #[async_trait]
    impl InferenceGateway for HangingGateway {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, InferenceError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!()
        }
    }

    fn specialist() -> Specialist {
        Specialist::new(
            "s001_originality",
            "Core Idea",
            "Novelty & Uniqueness",
            "Originality",
            25.0,
            vec![],
        )
    }

    fn proposal() -> Proposal {
        Proposal::new("TiffinGo", "Home-cooked meal delivery for commuters").unwrap()
    }

    #[tokio::test]
    async fn test_successful_invocation_produces_parsed_record() {
        let gateway = FixedGateway::new(
            r#"{"score": 77, "confidence_level": 0.85, "explanation": "Good",
                "strengths": ["a"], "weaknesses": ["b"],
                "key_insights": ["c"], "recommendations": ["d"]}"#,
        );
        let record = invoke_specialist(
            &gateway,
            &specialist(),
            &proposal(),
            &[],
            &ExecutionParams::default(),
            Duration::from_secs(60),
            &CancellationToken::new(),
        )
        .await;

        assert_eq!(record.origin, RecordOrigin::Parsed);
        assert_eq!(record.score, 77.0);

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.contains("TiffinGo"));
        assert!(requests[0].system.contains("Originality Validation Specialist"));
    }

    #[tokio::test]
    async fn test_gateway_failure_yields_fallback() {
        let record = invoke_specialist(
            &FailingGateway,
            &specialist(),
            &proposal(),
            &[],
            &ExecutionParams::default(),
            Duration::from_secs(60),
            &CancellationToken::new(),
        )
        .await;

        assert_eq!(record.origin, RecordOrigin::Fallback);
        assert_eq!(record.score, 50.0);
        assert!(record.explanation.contains("refused"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_yields_fallback() {
        let params = ExecutionParams::default().with_specialist_timeout(Duration::from_secs(1));
        let record = invoke_specialist(
            &HangingGateway,
            &specialist(),
            &proposal(),
            &[],
            &params,
            Duration::from_secs(60),
            &CancellationToken::new(),
        )
        .await;

        assert_eq!(record.origin, RecordOrigin::Fallback);
        assert!(record.explanation.contains("timed out"));
    }

    #[tokio::test]
    async fn test_exhausted_deadline_skips_gateway() {
        let gateway = FixedGateway::new("{}");
        let record = invoke_specialist(
            &gateway,
            &specialist(),
            &proposal(),
            &[],
            &ExecutionParams::default(),
            Duration::ZERO,
            &CancellationToken::new(),
        )
        .await;

        assert_eq!(record.origin, RecordOrigin::Fallback);
        assert!(record.explanation.contains("deadline"));
        assert!(gateway.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_token_skips_gateway() {
        let gateway = FixedGateway::new("{}");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let record = invoke_specialist(
            &gateway,
            &specialist(),
            &proposal(),
            &[],
            &ExecutionParams::default(),
            Duration::from_secs(60),
            &cancel,
        )
        .await;

        assert_eq!(record.origin, RecordOrigin::Fallback);
        assert!(record.explanation.contains("cancelled"));
        assert!(gateway.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dependency_context_lands_in_prompt() {
        let gateway = FixedGateway::new(r#"{"score": 60}"#);
        let deps = vec![DependencySummary {
            sub_parameter: "Innovation Index".to_string(),
            score: 81.0,
            explanation: "Highly novel".to_string(),
        }];

        invoke_specialist(
            &gateway,
            &specialist(),
            &proposal(),
            &deps,
            &ExecutionParams::default(),
            Duration::from_secs(60),
            &CancellationToken::new(),
        )
        .await;

        let requests = gateway.requests.lock().unwrap();
        assert!(requests[0].prompt.contains("Innovation Index scored 81"));
    }
}
