//! Reprocess command: regrade feedback into grades_revised.csv.

use std::path::Path;

use anyhow::{Context, Result};
use regrade_core::{BatchReport, GradingPolicy, reprocess};
use tracing::info;

pub fn run(dir: &Path, policy: &GradingPolicy, write_revised: bool) -> Result<BatchReport> {
    if write_revised {
        info!("Writing revised feedback files");
    }

    reprocess(dir, policy, write_revised)
        .with_context(|| format!("Failed to reprocess feedback in {}", dir.display()))
}
