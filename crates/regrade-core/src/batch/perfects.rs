use std::fs;
use std::path::Path;

use tracing::info;

use super::{BatchReport, discover, process_each};
use crate::config::{GradingPolicy, files};
use crate::error::Result;

/// Copy every feedback file graded above the perfect threshold into `perfects/`.
///
/// Copies are byte-for-byte; the original file is left untouched.
pub fn find_perfects(dir: &Path, policy: &GradingPolicy) -> Result<BatchReport> {
    let inputs = discover(dir, files::FEEDBACK_PATTERN)?;
    info!("Checking {} feedback files for perfect grades", inputs.len());

    let out_dir = dir.join(files::PERFECTS_DIR);
    fs::create_dir_all(&out_dir)?;

    let mut report = BatchReport::new();
    let mut copied = Vec::new();

    process_each(&inputs, &mut report, |file| {
        let grade = file.grade(policy)?;
        if grade.is_perfect(policy) {
            let target = out_dir.join(file.name());
            fs::copy(file.path(), &target)?;
            info!("{} is perfect ({:.2})", file.name(), grade.total);
            copied.push(target);
        }
        Ok(())
    });

    report.outputs = copied;
    info!("Copied {} perfect submissions", report.outputs.len());
    Ok(report)
}
