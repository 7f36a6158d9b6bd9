//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use regrade_core::{BatchReport, GradingPolicy};
use tracing::info;

/// Load the grading policy from a TOML file, or use the defaults.
pub fn load_policy(path: Option<&Path>) -> Result<GradingPolicy> {
    match path {
        Some(path) => {
            let policy = GradingPolicy::load(path)
                .with_context(|| format!("Failed to load grading policy from {}", path.display()))?;
            info!("Loaded grading policy from {}", path.display());
            Ok(policy)
        }
        None => Ok(GradingPolicy::default()),
    }
}

/// Print the end-of-run summary.
pub fn print_report(report: &BatchReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let summary = format!("Processed {}/{} files", report.processed, report.total());
    if report.is_clean() {
        eprintln!("{}", summary.green());
    } else {
        eprintln!("{}", summary.yellow());
        for failure in &report.failures {
            eprintln!("  {} {}: {}", "skipped".red(), failure.file, failure.reason);
        }
    }
    for output in &report.outputs {
        eprintln!("  {} {}", "wrote".cyan(), output.display());
    }

    Ok(())
}
