//! CLI entrypoint for idea-panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;
mod format;
mod progress;

use anyhow::{Context, Result, bail};
use args::{Cli, OutputFormat, parse_weights, resolve_concept};
use clap::Parser;
use format::ConsoleFormatter;
use panel_application::{ValidateIdeaInput, ValidateIdeaUseCase};
use panel_domain::specialist::Severity;
use panel_domain::{Proposal, SpecialistRegistry};
use panel_infrastructure::{ConfigLoader, JsonlResultWriter, OpenAiGateway};
use progress::ProgressReporter;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting idea-panel");

    // Load and validate configuration
    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("could not load configuration: {e}"))?;
    config.validate().context("invalid configuration")?;

    // Build the proposal
    let concept = resolve_concept(&cli.concept).context("could not read concept file")?;
    let proposal = match Proposal::new(&cli.name, concept) {
        Ok(p) => p,
        Err(e) => bail!("invalid proposal: {e}"),
    };

    let weights = match &cli.weights {
        Some(raw) => parse_weights(raw).map_err(|e| anyhow::anyhow!("invalid --weights: {e}"))?,
        None => Default::default(),
    };

    // === Dependency Injection ===
    // Registry: cycles are fatal, everything else is a warning
    let (registry, issues) = SpecialistRegistry::from_catalog()
        .map_err(|e| anyhow::anyhow!("specialist catalog is unusable: {e}"))?;
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => bail!("catalog error: {}", issue.message),
        }
    }
    info!(specialists = registry.len(), "specialist registry ready");

    let gateway = Arc::new(
        OpenAiGateway::from_config(&config.gateway)
            .map_err(|e| anyhow::anyhow!("could not build inference gateway: {e}"))?,
    );

    // Ctrl-C resolves outstanding specialists to fallback records instead
    // of killing the run.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, finishing run with fallback records");
                cancel.cancel();
            }
        });
    }

    let use_case = ValidateIdeaUseCase::new(Arc::new(registry), gateway);
    let input = ValidateIdeaInput::new(proposal)
        .with_cluster_weights(weights)
        .with_params(config.execution_params())
        .with_cancellation(cancel);

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    // Output
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{output}");

    // Persist (best-effort): CLI flag wins over config
    let store_path = cli
        .store
        .or_else(|| config.store.results_path.as_ref().map(Into::into));
    if let Some(path) = store_path {
        match JsonlResultWriter::new(&path) {
            Some(writer) => {
                if let Err(e) = writer.append(&result) {
                    warn!("could not persist result to {}: {e}", path.display());
                } else {
                    info!("result appended to {}", path.display());
                }
            }
            None => warn!("could not open results store at {}", path.display()),
        }
    }

    Ok(())
}
