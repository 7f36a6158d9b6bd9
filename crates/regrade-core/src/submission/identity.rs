use crate::error::ParseError;

/// Student identifiers recovered from a feedback file name.
///
/// `alice_feedback.txt` names one student; `group_of_alice_bob_feedback.txt`
/// names the last two underscore-separated segments as partners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Single(String),
    Pair(String, String),
}

impl Identity {
    /// Decode identifiers after stripping `suffix_len` characters from `file_name`.
    pub fn decode(file_name: &str, suffix_len: usize) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidFileName(file_name.to_string());

        let keep = file_name.chars().count().saturating_sub(suffix_len);
        let stem = match file_name.char_indices().nth(keep) {
            Some((end, _)) => &file_name[..end],
            None => file_name,
        };
        if stem.is_empty() {
            return Err(invalid());
        }

        let identity = match stem.rsplit_once('_') {
            None => Self::Single(stem.to_string()),
            Some((rest, last)) => {
                let first = rest.rsplit('_').next().unwrap_or(rest);
                if first.is_empty() || last.is_empty() {
                    return Err(invalid());
                }
                Self::Pair(first.to_string(), last.to_string())
            }
        };

        Ok(identity)
    }

    /// Identifiers in file name order, one CSV row each.
    ///
    /// `alice_bob` yields `alice` then `bob`. This deliberately differs from
    /// the legacy grading scripts, which wrote the last segment first.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Single(id) => vec![id.as_str()],
            Self::Pair(first, second) => vec![first.as_str(), second.as_str()],
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(id) => write!(f, "{}", id),
            Self::Pair(first, second) => write!(f, "{} and {}", first, second),
        }
    }
}
