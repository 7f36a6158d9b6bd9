//! Grading configuration.
//!
//! This module contains:
//! - `GradingPolicy` - weights and adjustments used to compute a grade
//! - File name and pattern constants shared by the batch jobs

mod policy;

pub use policy::*;

/// Input patterns and output names used by the batch jobs.
pub mod files {
    /// Feedback files written by the autograder.
    pub const FEEDBACK_PATTERN: &str = "*feedback.txt";

    /// Every text file in the directory (reprocess input).
    pub const TEXT_PATTERN: &str = "*.txt";

    /// Subdirectory receiving copies of perfect submissions.
    pub const PERFECTS_DIR: &str = "perfects";

    /// Ranking output.
    pub const RANKS_CSV: &str = "Ranks.csv";

    /// Revised grade sheet output.
    pub const GRADES_CSV: &str = "grades_revised.csv";

    /// Suffix appended to the stem of rewritten feedback files.
    pub const REVISED_SUFFIX: &str = "_revised.txt";
}

/// Default grading constants.
pub mod defaults {
    /// Share of the grade taken from the correctness score.
    pub const CORRECTNESS_WEIGHT: f64 = 0.8;

    /// Share of the grade taken from the points score.
    pub const POINTS_WEIGHT: f64 = 0.2;

    /// Points added for a bonus marker or removed for a penalty marker.
    pub const ADJUSTMENT_POINTS: f64 = 3.0;

    /// Length of the `_feedback.txt` suffix stripped before decoding identifiers.
    pub const NAME_SUFFIX_LEN: usize = 13;

    /// A grade strictly above this counts as perfect.
    pub const PERFECT_THRESHOLD: f64 = 100.0;
}
