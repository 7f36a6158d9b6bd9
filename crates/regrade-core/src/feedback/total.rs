use crate::error::ParseError;

/// In-game score reported as `<label>: N of M`.
///
/// Independent of the weighted grade; the ranker orders students by `earned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTotal {
    pub earned: i64,
    pub possible: i64,
}

impl ScoreTotal {
    /// Parse a single `<label>: N of M [...]` line.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (_, rest) = line.split_once(':')?;
        let (earned, rest) = rest.split_once(" of ")?;
        let possible = rest.split_whitespace().next()?;

        Some(Self {
            earned: earned.trim().parse().ok()?,
            possible: possible.parse().ok()?,
        })
    }

    /// Find the last `N of M` line in a feedback file.
    pub fn find<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseError> {
        lines
            .iter()
            .rev()
            .find_map(|line| Self::parse_line(line.as_ref()))
            .ok_or(ParseError::MissingTotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let total = ScoreTotal::parse_line("In-Game Score:        1234 of 5678 (21.7%)").unwrap();
        assert_eq!(
            total,
            ScoreTotal {
                earned: 1234,
                possible: 5678
            }
        );
    }

    #[test]
    fn test_parse_line_rejects_other_lines() {
        assert!(ScoreTotal::parse_line("Total Correctness (80.0%) :95.00").is_none());
        assert!(ScoreTotal::parse_line("Grade: 82.0").is_none());
        assert!(ScoreTotal::parse_line("a lot of text").is_none());
    }

    #[test]
    fn test_find_scans_from_end() {
        let lines = [
            "From File Games... (2)",
            "In-Game Score: 10 of 20 (50.0%)",
            "3 point bonus! - Congratulations on beating the Instructor solution!",
            "",
            "Total Correctness (80.0%) :100.00",
            "Total Points (20.0%) :\t   100.00",
            " + 3 point super solution bonus",
            "Grade: 103.0",
        ];
        let total = ScoreTotal::find(&lines).unwrap();
        assert_eq!(total.earned, 10);
        assert_eq!(total.possible, 20);
    }

    #[test]
    fn test_find_missing() {
        let lines = ["Correctness: 90", "Points: 50", "Grade: 82"];
        assert_eq!(ScoreTotal::find(&lines), Err(ParseError::MissingTotal));
    }
}
