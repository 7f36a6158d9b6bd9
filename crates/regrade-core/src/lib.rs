//! # regrade-core
//!
//! Core library for regrading autograder feedback files.
//!
//! This crate provides:
//! - Trailer scanning and weighted grade computation
//! - Student identifier decoding from feedback file names
//! - CSV and revised feedback output
//! - Batch jobs (perfect filter, ranker, reprocessor) with per-file error isolation

pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod feedback;
pub mod submission;

// Re-export from batch module
pub use batch::{BatchReport, FileFailure, RankOrder, discover, find_perfects, rank, reprocess};

// Re-export from config module
pub use config::GradingPolicy;

// Re-export from error module
pub use error::{Error, ParseError, Result};

// Re-export from feedback module
pub use feedback::{Adjustment, Adjustments, GradeBreakdown, ScoreTotal, Trailer};

// Re-export from submission module
pub use submission::{FeedbackFile, Identity};
