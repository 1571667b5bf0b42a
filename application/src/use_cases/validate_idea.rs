//! Validate Idea use case
//!
//! Orchestrates the full panel run: plan waves, dispatch each wave with
//! bounded concurrency, carry dependency context forward, aggregate.
//!
//! The execute contract is total: the use case never returns an error.
//! Partial failures become fallback records; an unrecoverable condition
//! (a catalog that cannot be planned) becomes a top-level fallback result
//! carrying the reason.

use crate::config::ExecutionParams;
use crate::ports::inference::InferenceGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::invoke_specialist::invoke_specialist;
use panel_domain::aggregate::{aggregate, fallback_result};
use panel_domain::evaluation::{EvaluationRecord, RecordOrigin};
use panel_domain::planner::plan_waves;
use panel_domain::prompt::DependencySummary;
use panel_domain::{Proposal, SpecialistRegistry};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Input for the ValidateIdea use case
#[derive(Debug, Clone)]
pub struct ValidateIdeaInput {
    /// The proposal under evaluation
    pub proposal: Proposal,
    /// Optional cluster weights for the overall score; empty means unweighted
    pub cluster_weights: BTreeMap<String, f64>,
    /// Execution control parameters
    pub params: ExecutionParams,
    /// Caller-side cancellation; outstanding specialists resolve to fallbacks
    pub cancel: CancellationToken,
}

impl ValidateIdeaInput {
    pub fn new(proposal: Proposal) -> Self {
        Self {
            proposal,
            cluster_weights: BTreeMap::new(),
            params: ExecutionParams::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cluster_weights(mut self, weights: BTreeMap<String, f64>) -> Self {
        self.cluster_weights = weights;
        self
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Use case for running a full panel validation
pub struct ValidateIdeaUseCase<G: InferenceGateway + 'static> {
    registry: Arc<SpecialistRegistry>,
    gateway: Arc<G>,
}

impl<G: InferenceGateway + 'static> ValidateIdeaUseCase<G> {
    pub fn new(registry: Arc<SpecialistRegistry>, gateway: Arc<G>) -> Self {
        Self { registry, gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: ValidateIdeaInput) -> panel_domain::ValidationResult {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ValidateIdeaInput,
        progress: &dyn ProgressNotifier,
    ) -> panel_domain::ValidationResult {
        let started = std::time::Instant::now();
        let proposal_name = input.proposal.name().to_string();
        let weights = input.cluster_weights.clone();

        match self.run(input, progress).await {
            Ok(records) => {
                let elapsed = started.elapsed().as_millis() as u64;
                aggregate(&proposal_name, records, &weights, elapsed, chrono::Utc::now())
            }
            Err(reason) => {
                warn!(%reason, "validation run aborted");
                fallback_result(
                    &proposal_name,
                    &reason,
                    started.elapsed().as_millis() as u64,
                    chrono::Utc::now(),
                )
            }
        }
    }

    async fn run(
        &self,
        input: ValidateIdeaInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<EvaluationRecord>, String> {
        let plan = plan_waves(&self.registry).map_err(|e| e.to_string())?;

        info!(
            proposal = input.proposal.name(),
            specialists = plan.total_specialists(),
            waves = plan.wave_count(),
            pool = input.params.worker_pool_size,
            "starting panel validation"
        );
        progress.on_run_start(plan.total_specialists(), plan.wave_count());

        let deadline = tokio::time::Instant::now() + input.params.run_deadline;
        let semaphore = Arc::new(Semaphore::new(input.params.worker_pool_size));
        let mut finished: HashMap<String, EvaluationRecord> = HashMap::new();

        for (wave_idx, wave) in plan.waves().iter().enumerate() {
            progress.on_wave_start(wave_idx, wave.len());
            debug!(wave = wave_idx, specialists = wave.len(), "dispatching wave");

            let mut join_set: JoinSet<(String, EvaluationRecord)> = JoinSet::new();

            for id in wave.specialist_ids() {
                // Ids come from the plan, which was built from this registry.
                let Some(specialist) = self.registry.get(id) else {
                    continue;
                };
                let dependencies = self.dependency_context(specialist, &finished);

                let specialist = specialist.clone();
                let proposal = input.proposal.clone();
                let params = input.params.clone();
                let cancel = input.cancel.clone();
                let gateway = Arc::clone(&self.gateway);
                let semaphore = Arc::clone(&semaphore);

                join_set.spawn(async move {
                    let record = match semaphore.acquire_owned().await {
                        Ok(_permit) => {
                            // Measured after the permit wait: time spent queued
                            // behind the pool counts against the run deadline.
                            let remaining =
                                deadline.saturating_duration_since(tokio::time::Instant::now());
                            invoke_specialist(
                                gateway.as_ref(),
                                &specialist,
                                &proposal,
                                &dependencies,
                                &params,
                                remaining,
                                &cancel,
                            )
                            .await
                        }
                        Err(_) => EvaluationRecord::fallback(&specialist, "worker pool closed", 0),
                    };
                    (specialist.id().to_string(), record)
                });
            }

            while let Some(joined) = join_set.join_next().await {
                match joined {
                    Ok((id, record)) => {
                        progress.on_specialist_complete(
                            &id,
                            record.origin == RecordOrigin::Fallback,
                        );
                        finished.insert(id, record);
                    }
                    Err(e) => warn!(error = %e, "specialist task aborted"),
                }
            }

            // A panicked task must still leave a record behind.
            for id in wave.specialist_ids() {
                if !finished.contains_key(id) {
                    if let Some(specialist) = self.registry.get(id) {
                        finished.insert(
                            id.clone(),
                            EvaluationRecord::fallback(specialist, "invocation aborted", 0),
                        );
                    }
                }
            }

            progress.on_wave_complete(wave_idx);
        }

        // Emit in registry declaration order for deterministic downstream logs.
        let records = self
            .registry
            .all()
            .iter()
            .filter_map(|s| finished.remove(s.id()))
            .collect();
        Ok(records)
    }

    /// Condense finished upstream records into prompt context for one
    /// specialist. Dependencies that resolved to nothing (dangling names,
    /// lost records) are simply absent.
    fn dependency_context(
        &self,
        specialist: &panel_domain::Specialist,
        finished: &HashMap<String, EvaluationRecord>,
    ) -> Vec<DependencySummary> {
        let mut seen: Vec<&str> = Vec::new();
        let mut context = Vec::new();

        for name in specialist.dependencies() {
            for provider in self.registry.by_dependency_name(name) {
                if provider.id() == specialist.id() || seen.contains(&provider.id()) {
                    continue;
                }
                seen.push(provider.id());
                if let Some(record) = finished.get(provider.id()) {
                    context.push(DependencySummary {
                        sub_parameter: record.sub_parameter.clone(),
                        score: record.score,
                        explanation: record.explanation.clone(),
                    });
                }
            }
        }

        context
    }
}
