use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::{BatchReport, discover, process_each};
use crate::config::{GradingPolicy, files};
use crate::error::Result;
use crate::export::{
    CsvWriter, format_comment, format_grade_rows, format_grades_header, format_revised_feedback,
};
use crate::feedback::GradeBreakdown;

/// Regrade every text file and write `grades_revised.csv`.
///
/// With `write_revised`, each input also gets a `<stem>_revised.txt` holding
/// the feedback body and the recomputed grade summary, and the CSV comments
/// carry that same text. Otherwise the comments are the body alone. Earlier
/// `_revised.txt` outputs are not read back in.
pub fn reprocess(dir: &Path, policy: &GradingPolicy, write_revised: bool) -> Result<BatchReport> {
    let inputs: Vec<_> = discover(dir, files::TEXT_PATTERN)?
        .into_iter()
        .filter(|path| {
            !path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(files::REVISED_SUFFIX))
        })
        .collect();
    info!("Reprocessing {} feedback files", inputs.len());

    let mut writer = CsvWriter::create(dir.join(files::GRADES_CSV), &format_grades_header())?;
    let mut report = BatchReport::new();
    let mut revised_files = Vec::new();

    process_each(&inputs, &mut report, |file| {
        let identity = file.identity(policy)?;
        let trailer = file.trailer()?;
        let grade = GradeBreakdown::compute(&trailer, policy);
        let body = file.body(&trailer);

        // The grade summary only reaches the comments when it is also written out.
        let comments = if write_revised {
            let revised = format_comment(&format_revised_feedback(body, &grade, policy));
            let stem = file.name().strip_suffix(".txt").unwrap_or(file.name());
            let target = dir.join(format!("{}{}", stem, files::REVISED_SUFFIX));
            fs::write(&target, &revised)?;
            debug!("Wrote {}", target.display());
            revised_files.push(target);
            revised
        } else {
            format_comment(body)
        };

        writer.write_rows(format_grade_rows(&identity, &grade, &comments))?;
        Ok(())
    });

    info!("Wrote {} grade rows", writer.rows());
    report.outputs.push(writer.finish()?);
    report.outputs.extend(revised_files);
    Ok(report)
}
