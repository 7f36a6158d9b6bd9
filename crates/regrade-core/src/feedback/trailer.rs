//! Backward scanner for the feedback trailer.
//!
//! The autograder ends every feedback file with:
//!
//! ```text
//! Total Correctness (80.0%) :95.00
//! Total Points (20.0%) :     50.00
//!  - 3 point printing pentalty          (optional)
//!  + 3 point super solution bonus       (optional)
//! Grade: 82.0
//! ```
//!
//! The scanner walks these lines from the end:
//! `Summary -> Adjustments -> Points -> Correctness -> Done`.

use super::Adjustments;
use crate::error::ParseError;

/// Trailer lines without any marker line: correctness, points, summary.
pub const MIN_TRAILER_LINES: usize = 3;

/// Values read from the end of a feedback file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trailer {
    pub correctness: f64,
    pub points: f64,
    pub adjustments: Adjustments,
    /// Number of lines the trailer occupies, summary line included.
    pub len: usize,
}

#[derive(Debug)]
enum ScanState {
    Summary,
    Adjustments,
    Points {
        adjustments: Adjustments,
    },
    Correctness {
        adjustments: Adjustments,
        points: f64,
    },
    Done(Trailer),
}

impl Trailer {
    /// Scan the trailer of `lines`.
    pub fn scan<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseError> {
        let found = lines.len();
        let from_end = |n: usize| found.checked_sub(n).map(|i| lines[i].as_ref());

        let mut consumed = 0;
        let mut state = ScanState::Summary;

        loop {
            state = match state {
                ScanState::Summary => {
                    if found == 0 {
                        return Err(ParseError::TooShort {
                            needed: MIN_TRAILER_LINES,
                            found,
                        });
                    }
                    // The autograder's own grade line is recomputed, never read.
                    consumed += 1;
                    ScanState::Adjustments
                }
                ScanState::Adjustments => {
                    let adjustments =
                        Adjustments::classify(from_end(consumed + 2), from_end(consumed + 1));
                    consumed += adjustments.marker_lines();
                    ScanState::Points { adjustments }
                }
                ScanState::Points { adjustments } => {
                    let line = from_end(consumed + 1).ok_or(ParseError::TooShort {
                        needed: MIN_TRAILER_LINES + adjustments.marker_lines(),
                        found,
                    })?;
                    consumed += 1;
                    ScanState::Correctness {
                        adjustments,
                        points: parse_value(line)?,
                    }
                }
                ScanState::Correctness {
                    adjustments,
                    points,
                } => {
                    let line = from_end(consumed + 1).ok_or(ParseError::TooShort {
                        needed: MIN_TRAILER_LINES + adjustments.marker_lines(),
                        found,
                    })?;
                    consumed += 1;
                    ScanState::Done(Trailer {
                        correctness: parse_value(line)?,
                        points,
                        adjustments,
                        len: consumed,
                    })
                }
                ScanState::Done(trailer) => return Ok(trailer),
            };
        }
    }

    /// Lines preceding the trailer.
    pub fn body<'a, S>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[..lines.len().saturating_sub(self.len)]
    }
}

/// Parse the number after the first `:` of a trailer line.
pub fn parse_value(line: &str) -> Result<f64, ParseError> {
    let (_, value) = line
        .split_once(':')
        .ok_or_else(|| ParseError::MissingColon {
            line: line.trim().to_string(),
        })?;
    let value = value.trim();

    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber {
            line: line.trim().to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(lines: &[&str]) -> Vec<String> {
        let trailer = Trailer::scan(lines).unwrap();
        trailer.body(lines).iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scan_plain_trailer() {
        let lines = ["header", "Correctness: 90", "Points: 50", "Grade: 82.0"];
        let trailer = Trailer::scan(&lines).unwrap();

        assert_eq!(trailer.correctness, 90.0);
        assert_eq!(trailer.points, 50.0);
        assert_eq!(trailer.adjustments, Adjustments::NONE);
        assert_eq!(trailer.len, 3);
        assert_eq!(body_of(&lines), vec!["header"]);
    }

    #[test]
    fn test_scan_penalty_trailer() {
        let lines = [
            "header",
            "Total Correctness (80.0%) :95.00",
            "Total Points (20.0%) :\t   40.00",
            " - 3 point printing pentalty",
            "Grade: 81.0",
        ];
        let trailer = Trailer::scan(&lines).unwrap();

        assert_eq!(trailer.correctness, 95.0);
        assert_eq!(trailer.points, 40.0);
        assert!(trailer.adjustments.penalty);
        assert!(!trailer.adjustments.bonus);
        assert_eq!(trailer.len, 4);
        assert_eq!(body_of(&lines), vec!["header"]);
    }

    #[test]
    fn test_scan_bonus_trailer() {
        let lines = [
            "Correctness: 100",
            "Points: 100",
            " + 3 point super solution bonus",
            "Grade: 103.0",
        ];
        let trailer = Trailer::scan(&lines).unwrap();

        assert!(trailer.adjustments.bonus);
        assert!(!trailer.adjustments.penalty);
        assert_eq!(trailer.len, 4);
        assert!(body_of(&lines).is_empty());
    }

    #[test]
    fn test_scan_penalty_and_bonus_trailer() {
        let lines = [
            "a",
            "b",
            "Correctness: 100",
            "Points: 100",
            " - 3 point printing pentalty",
            " + 3 point super solution bonus",
            "Grade: 100.0",
        ];
        let trailer = Trailer::scan(&lines).unwrap();

        assert!(trailer.adjustments.penalty && trailer.adjustments.bonus);
        assert_eq!(trailer.correctness, 100.0);
        assert_eq!(trailer.points, 100.0);
        assert_eq!(trailer.len, 5);
        assert_eq!(body_of(&lines), vec!["a", "b"]);
    }

    #[test]
    fn test_scan_too_short() {
        let lines = ["Points: 50", "Grade: 10"];
        assert_eq!(
            Trailer::scan(&lines),
            Err(ParseError::TooShort {
                needed: 3,
                found: 2
            })
        );

        let empty: [&str; 0] = [];
        assert!(matches!(
            Trailer::scan(&empty),
            Err(ParseError::TooShort { found: 0, .. })
        ));
    }

    #[test]
    fn test_scan_too_short_with_markers() {
        let lines = ["Points: 50", " - 3 penalty", "Grade: 10"];
        assert_eq!(
            Trailer::scan(&lines),
            Err(ParseError::TooShort {
                needed: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_scan_missing_colon() {
        let lines = ["Correctness 90", "Points: 50", "Grade"];
        assert!(matches!(
            Trailer::scan(&lines),
            Err(ParseError::MissingColon { .. })
        ));
    }

    #[test]
    fn test_scan_invalid_number() {
        let lines = ["Correctness: ninety", "Points: 50", "Grade"];
        match Trailer::scan(&lines) {
            Err(ParseError::InvalidNumber { value, .. }) => assert_eq!(value, "ninety"),
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_value_uses_first_colon() {
        assert_eq!(parse_value("Score: 12.5").unwrap(), 12.5);
        assert!(parse_value("Time: 10:30").is_err());
        assert!(parse_value("Value: NaN").is_err());
    }
}
