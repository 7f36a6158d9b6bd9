use super::{Adjustments, Trailer};
use crate::config::GradingPolicy;

/// Weighted grade computed from a trailer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBreakdown {
    pub correctness: f64,
    pub points: f64,
    pub adjustments: Adjustments,
    pub adjustment_points: f64,
    /// Final grade, never below zero and not capped above.
    pub total: f64,
}

impl GradeBreakdown {
    pub fn compute(trailer: &Trailer, policy: &GradingPolicy) -> Self {
        let weighted = trailer.correctness * policy.correctness_weight
            + trailer.points * policy.points_weight
            + trailer.adjustments.points(policy.adjustment_points);

        Self {
            correctness: trailer.correctness,
            points: trailer.points,
            adjustments: trailer.adjustments,
            adjustment_points: policy.adjustment_points,
            total: weighted.max(0.0),
        }
    }

    pub fn is_perfect(&self, policy: &GradingPolicy) -> bool {
        self.total > policy.perfect_threshold
    }

    /// Summary lines appended to revised feedback.
    pub fn summary_lines(&self, policy: &GradingPolicy) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Correctness ({}%): {:.6}%",
                percent(policy.correctness_weight),
                self.correctness
            ),
            format!(
                "Points ({}%): {:.6}%",
                percent(policy.points_weight),
                self.points
            ),
        ];
        lines.extend(
            self.adjustments
                .iter()
                .map(|a| a.note(self.adjustment_points)),
        );
        lines.push(format!("Total: {:.6}%", self.total));
        lines
    }
}

fn percent(weight: f64) -> f64 {
    (weight * 1000.0).round() / 10.0
}
