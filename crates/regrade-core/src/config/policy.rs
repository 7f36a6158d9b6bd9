use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{Error, Result};

/// Weights and adjustments applied when turning trailer values into a grade.
///
/// Loaded from an optional TOML file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradingPolicy {
    pub correctness_weight: f64,
    pub points_weight: f64,
    pub adjustment_points: f64,
    pub name_suffix_len: usize,
    pub perfect_threshold: f64,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            correctness_weight: defaults::CORRECTNESS_WEIGHT,
            points_weight: defaults::POINTS_WEIGHT,
            adjustment_points: defaults::ADJUSTMENT_POINTS,
            name_suffix_len: defaults::NAME_SUFFIX_LEN,
            perfect_threshold: defaults::PERFECT_THRESHOLD,
        }
    }
}

impl GradingPolicy {
    /// Load a policy from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a policy from TOML content and validate it
    pub fn parse(content: &str) -> Result<Self> {
        let policy: Self = toml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("correctness_weight", self.correctness_weight),
            ("points_weight", self.points_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(Error::ConfigParseError(format!(
                    "{} must be within [0, 1], got {}",
                    name, weight
                )));
            }
        }
        if !self.adjustment_points.is_finite() || self.adjustment_points < 0.0 {
            return Err(Error::ConfigParseError(format!(
                "adjustment_points must be a non-negative number, got {}",
                self.adjustment_points
            )));
        }
        if !self.perfect_threshold.is_finite() {
            return Err(Error::ConfigParseError(
                "perfect_threshold must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
