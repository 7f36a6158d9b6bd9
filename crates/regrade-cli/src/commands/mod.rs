//! CLI command implementations.
//!
//! Each command runs one batch job and returns its report.

pub mod perfects;
pub mod rank;
pub mod reprocess;
