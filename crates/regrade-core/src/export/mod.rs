//! Output formats: ranking and grade sheet CSV rows, revised feedback text.

mod csv;

pub use csv::CsvWriter;

use crate::config::GradingPolicy;
use crate::feedback::{GradeBreakdown, ScoreTotal};
use crate::submission::Identity;

pub fn format_ranks_header() -> String {
    ["NetID", "Score", ""].join(",")
}

/// One `id,score,` row per identifier
pub fn format_rank_rows(identity: &Identity, total: &ScoreTotal) -> Vec<String> {
    identity
        .ids()
        .into_iter()
        .map(|id| [id.to_string(), total.earned.to_string(), String::new()].join(","))
        .collect()
}

pub fn format_grades_header() -> String {
    ["NetID", "Grade", "Add Comments", ""].join(",")
}

/// One `id,grade,"comments",` row per identifier
pub fn format_grade_rows(
    identity: &Identity,
    grade: &GradeBreakdown,
    comments: &str,
) -> Vec<String> {
    let comments = quote_csv(comments);
    identity
        .ids()
        .into_iter()
        .map(|id| {
            [
                id.to_string(),
                format!("{:.6}", grade.total),
                comments.clone(),
                String::new(),
            ]
            .join(",")
        })
        .collect()
}

/// Feedback body followed by the recomputed grade summary.
pub fn format_revised_feedback<S: AsRef<str>>(
    body: &[S],
    grade: &GradeBreakdown,
    policy: &GradingPolicy,
) -> Vec<String> {
    body.iter()
        .map(|line| line.as_ref().to_string())
        .chain(grade.summary_lines(policy))
        .collect()
}

/// Comment text for the grade sheet: every line keeps its newline.
pub fn format_comment<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(|line| format!("{}\n", line.as_ref())).collect()
}

/// Wrap a field in double quotes, doubling any embedded quote.
pub fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Adjustments, Trailer};

    fn grade(correctness: f64, points: f64) -> GradeBreakdown {
        let trailer = Trailer {
            correctness,
            points,
            adjustments: Adjustments::NONE,
            len: 3,
        };
        GradeBreakdown::compute(&trailer, &GradingPolicy::default())
    }

    #[test]
    fn test_headers() {
        assert_eq!(format_ranks_header(), "NetID,Score,");
        assert_eq!(format_grades_header(), "NetID,Grade,Add Comments,");
    }

    #[test]
    fn test_rank_rows_pair() {
        let identity = Identity::Pair("alice".to_string(), "bob".to_string());
        let total = ScoreTotal {
            earned: 1200,
            possible: 1000,
        };
        assert_eq!(
            format_rank_rows(&identity, &total),
            vec!["alice,1200,", "bob,1200,"]
        );
    }

    #[test]
    fn test_grade_rows_single() {
        let identity = Identity::Single("carol".to_string());
        let rows = format_grade_rows(&identity, &grade(90.0, 50.0), "Nice work\nTotal: 82%");
        assert_eq!(rows, vec!["carol,82.000000,\"Nice work\nTotal: 82%\","]);
    }

    #[test]
    fn test_grade_rows_pair_share_grade() {
        let identity = Identity::Pair("alice".to_string(), "bob".to_string());
        let rows = format_grade_rows(&identity, &grade(100.0, 100.0), "ok");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "alice,100.000000,\"ok\",");
        assert_eq!(rows[1], "bob,100.000000,\"ok\",");
    }

    #[test]
    fn test_comment_keeps_line_endings() {
        assert_eq!(format_comment(&["Header"]), "Header\n");
        assert_eq!(format_comment(&["a", "", "b"]), "a\n\nb\n");
        assert_eq!(format_comment::<&str>(&[]), "");
    }

    #[test]
    fn test_quote_csv_escapes_quotes() {
        assert_eq!(quote_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_revised_feedback_total_matches_grade() {
        let policy = GradingPolicy::default();
        let g = grade(75.5, 42.0);
        let lines = format_revised_feedback(&["body"], &g, &policy);

        assert_eq!(lines[0], "body");
        let total_line = lines.last().unwrap();
        assert_eq!(total_line, &format!("Total: {:.6}%", g.total));
    }
}
