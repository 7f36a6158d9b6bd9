//! Perfects command: copy submissions graded above 100.

use std::path::Path;

use anyhow::{Context, Result};
use regrade_core::{BatchReport, GradingPolicy, find_perfects};

pub fn run(dir: &Path, policy: &GradingPolicy) -> Result<BatchReport> {
    find_perfects(dir, policy)
        .with_context(|| format!("Failed to collect perfect submissions in {}", dir.display()))
}
