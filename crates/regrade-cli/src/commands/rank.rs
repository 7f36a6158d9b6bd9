//! Rank command: list in-game score totals in Ranks.csv.

use std::path::Path;

use anyhow::{Context, Result};
use regrade_core::{BatchReport, GradingPolicy, RankOrder, rank};

pub fn run(dir: &Path, policy: &GradingPolicy, sort: bool) -> Result<BatchReport> {
    let order = if sort {
        RankOrder::Score
    } else {
        RankOrder::Discovery
    };

    rank(dir, policy, order)
        .with_context(|| format!("Failed to rank feedback in {}", dir.display()))
}
