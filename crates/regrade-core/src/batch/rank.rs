use std::path::Path;

use tracing::{debug, info};

use super::{BatchReport, discover, process_each};
use crate::config::{GradingPolicy, files};
use crate::error::Result;
use crate::export::{CsvWriter, format_rank_rows, format_ranks_header};
use crate::feedback::ScoreTotal;
use crate::submission::Identity;

/// Row order of the ranking file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankOrder {
    /// Sorted file name order
    #[default]
    Discovery,
    /// Highest score first, ties by identifier
    Score,
}

/// Write `Ranks.csv` listing every student's in-game score total.
pub fn rank(dir: &Path, policy: &GradingPolicy, order: RankOrder) -> Result<BatchReport> {
    let inputs = discover(dir, files::FEEDBACK_PATTERN)?;
    info!("Ranking {} feedback files", inputs.len());

    let mut writer = CsvWriter::create(dir.join(files::RANKS_CSV), &format_ranks_header())?;
    let mut report = BatchReport::new();
    let mut entries: Vec<(Identity, ScoreTotal)> = Vec::new();

    process_each(&inputs, &mut report, |file| {
        let identity = file.identity(policy)?;
        let total = file.score_total()?;
        debug!("{}: {} of {}", file.name(), total.earned, total.possible);
        entries.push((identity, total));
        Ok(())
    });

    if order == RankOrder::Score {
        entries.sort_by(|(a_id, a), (b_id, b)| {
            b.earned
                .cmp(&a.earned)
                .then_with(|| a_id.to_string().cmp(&b_id.to_string()))
        });
    }

    for (identity, total) in &entries {
        writer.write_rows(format_rank_rows(identity, total))?;
    }
    info!("Wrote {} ranking rows", writer.rows());

    report.outputs.push(writer.finish()?);
    Ok(report)
}
