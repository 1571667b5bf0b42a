//! Command-line argument definitions

use clap::{ArgAction, Parser, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Multi-specialist validation panel for startup ideas
#[derive(Debug, Parser)]
#[command(name = "idea-panel", version, about)]
pub struct Cli {
    /// Short name of the proposal
    #[arg(long)]
    pub name: String,

    /// Concept description; prefix with @ to read from a file
    #[arg(long)]
    pub concept: String,

    /// Cluster weights as comma-separated name=value pairs
    #[arg(long)]
    pub weights: Option<String>,

    /// Explicit config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Full)]
    pub output: OutputFormat,

    /// Append the result to this JSONL file (overrides config)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with per-cluster breakdown
    Full,
    /// Verdict and headline numbers only
    Summary,
    /// Raw JSON result
    Json,
}

/// Parse `name=value,name=value` cluster weights.
///
/// Weights must be positive; cluster names may contain spaces and `&`.
pub fn parse_weights(raw: &str) -> Result<BTreeMap<String, f64>, String> {
    let mut weights = BTreeMap::new();

    for pair in raw.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected name=value, got \"{pair}\""))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("empty cluster name in \"{pair}\""));
        }
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid weight in \"{pair}\""))?;
        if value <= 0.0 || !value.is_finite() {
            return Err(format!("weight must be positive in \"{pair}\""));
        }
        weights.insert(name.to_string(), value);
    }

    Ok(weights)
}

/// Resolve the concept argument: `@path` reads the file, anything else is
/// taken literally.
pub fn resolve_concept(raw: &str) -> std::io::Result<String> {
    match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path),
        None => Ok(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_weights() {
        let weights = parse_weights("Core Idea=2, Risk & Strategy=0.5").unwrap();
        assert_eq!(weights["Core Idea"], 2.0);
        assert_eq!(weights["Risk & Strategy"], 0.5);
    }

    #[test]
    fn test_parse_weights_rejects_garbage() {
        assert!(parse_weights("Core Idea").is_err());
        assert!(parse_weights("Core Idea=abc").is_err());
        assert!(parse_weights("Core Idea=-1").is_err());
        assert!(parse_weights("=2").is_err());
    }

    #[test]
    fn test_empty_weights_string_is_empty_map() {
        assert!(parse_weights("").unwrap().is_empty());
    }

    #[test]
    fn test_resolve_concept_literal() {
        assert_eq!(resolve_concept("plain text").unwrap(), "plain text");
    }

    #[test]
    fn test_resolve_concept_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("idea_panel_concept_test.txt");
        std::fs::write(&path, "concept from file").unwrap();
        let arg = format!("@{}", path.display());
        assert_eq!(resolve_concept(&arg).unwrap(), "concept from file");
        let _ = std::fs::remove_file(&path);
    }
}
