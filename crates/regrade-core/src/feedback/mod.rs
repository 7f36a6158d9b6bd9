//! Feedback trailer parsing and grading.

mod adjustment;
mod grade;
mod total;
mod trailer;

pub use adjustment::*;
pub use grade::GradeBreakdown;
pub use total::ScoreTotal;
pub use trailer::{MIN_TRAILER_LINES, Trailer, parse_value};
