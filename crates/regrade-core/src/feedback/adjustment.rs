use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Character flagging a printing penalty line.
pub const PENALTY_MARKER: char = '-';

/// Character flagging a super solution bonus line.
pub const BONUS_MARKER: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Adjustment {
    #[strum(serialize = "printing penalty")]
    PrintingPenalty,
    #[strum(serialize = "super solution bonus")]
    SuperSolutionBonus,
}

impl Adjustment {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn sign(&self) -> f64 {
        match self {
            Self::PrintingPenalty => -1.0,
            Self::SuperSolutionBonus => 1.0,
        }
    }

    fn marker(&self) -> char {
        match self {
            Self::PrintingPenalty => PENALTY_MARKER,
            Self::SuperSolutionBonus => BONUS_MARKER,
        }
    }

    /// Summary line appended to revised feedback, e.g. ` - 3 point printing penalty`
    pub fn note(&self, points: f64) -> String {
        format!(" {} {} point {}", self.marker(), points, self.label())
    }
}

/// Penalty and bonus flags read from the trailer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjustments {
    pub penalty: bool,
    pub bonus: bool,
}

impl Adjustments {
    pub const NONE: Self = Self {
        penalty: false,
        bonus: false,
    };

    /// Classify the two lines preceding the summary line.
    ///
    /// `before` is line[-3] and `last` is line[-2]. A penalty line followed by
    /// a bonus line yields both; otherwise only `last` is inspected and a
    /// penalty marker wins over a bonus marker.
    pub fn classify(before: Option<&str>, last: Option<&str>) -> Self {
        let last = last.unwrap_or_default();
        let before = before.unwrap_or_default();

        if before.contains(PENALTY_MARKER) && last.contains(BONUS_MARKER) {
            Self {
                penalty: true,
                bonus: true,
            }
        } else if last.contains(PENALTY_MARKER) {
            Self {
                penalty: true,
                bonus: false,
            }
        } else if last.contains(BONUS_MARKER) {
            Self {
                penalty: false,
                bonus: true,
            }
        } else {
            Self::NONE
        }
    }

    /// Number of trailer lines taken up by marker lines
    pub fn marker_lines(&self) -> usize {
        usize::from(self.penalty) + usize::from(self.bonus)
    }

    pub fn contains(&self, adjustment: Adjustment) -> bool {
        match adjustment {
            Adjustment::PrintingPenalty => self.penalty,
            Adjustment::SuperSolutionBonus => self.bonus,
        }
    }

    /// Applied adjustments in the order they are listed in feedback.
    pub fn iter(&self) -> impl Iterator<Item = Adjustment> + '_ {
        Adjustment::iter().filter(|a| self.contains(*a))
    }

    /// Net points added to the weighted score.
    pub fn points(&self, magnitude: f64) -> f64 {
        self.iter().map(|a| a.sign() * magnitude).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_no_markers() {
        let adj = Adjustments::classify(Some("Correctness: 90"), Some("Points: 50"));
        assert_eq!(adj, Adjustments::NONE);
        assert_eq!(adj.marker_lines(), 0);
    }

    #[test]
    fn test_classify_penalty_only() {
        let adj = Adjustments::classify(Some("Points: 50"), Some(" - 3 point printing penalty"));
        assert!(adj.penalty);
        assert!(!adj.bonus);
        assert_eq!(adj.marker_lines(), 1);
    }

    #[test]
    fn test_classify_bonus_only() {
        let adj = Adjustments::classify(Some("Points: 50"), Some(" + 3 point bonus"));
        assert!(!adj.penalty);
        assert!(adj.bonus);
    }

    #[test]
    fn test_classify_both() {
        let adj = Adjustments::classify(Some(" - 3 penalty"), Some(" + 3 bonus"));
        assert!(adj.penalty && adj.bonus);
        assert_eq!(adj.marker_lines(), 2);
    }

    #[test]
    fn test_classify_penalty_wins_on_mixed_last_line() {
        let adj = Adjustments::classify(Some("Points: 50"), Some("+/- 3"));
        assert_eq!(
            adj,
            Adjustments {
                penalty: true,
                bonus: false
            }
        );
    }

    #[test]
    fn test_classify_missing_lines() {
        assert_eq!(Adjustments::classify(None, None), Adjustments::NONE);
        assert!(Adjustments::classify(None, Some("+")).bonus);
    }

    #[test]
    fn test_points() {
        assert_eq!(Adjustments::NONE.points(3.0), 0.0);
        let both = Adjustments {
            penalty: true,
            bonus: true,
        };
        assert_eq!(both.points(3.0), 0.0);
        let penalty = Adjustments {
            penalty: true,
            bonus: false,
        };
        assert_eq!(penalty.points(3.0), -3.0);
    }

    #[test]
    fn test_note_text() {
        assert_eq!(
            Adjustment::PrintingPenalty.note(3.0),
            " - 3 point printing penalty"
        );
        assert_eq!(
            Adjustment::SuperSolutionBonus.note(3.0),
            " + 3 point super solution bonus"
        );
    }
}
