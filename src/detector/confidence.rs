//! Ordinal classification of confidence scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Band boundary below which a detection is considered unreliable.
pub const MODERATE_THRESHOLD: f64 = 0.45;
/// Band boundary for high confidence, safe for automation.
pub const HIGH_THRESHOLD: f64 = 0.65;
/// Band boundary for very high confidence, fully automated use.
pub const VERY_HIGH_THRESHOLD: f64 = 0.80;

/// Ordinal confidence band derived from a numeric score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Unreliable,
    Moderate,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    /// Map a score to its band. Total and deterministic; scores are
    /// clamped to `[0, 1]` before they reach this point.
    pub fn from_score(score: f64) -> ConfidenceLevel {
        if score < MODERATE_THRESHOLD {
            ConfidenceLevel::Unreliable
        } else if score < HIGH_THRESHOLD {
            ConfidenceLevel::Moderate
        } else if score < VERY_HIGH_THRESHOLD {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::VeryHigh
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfidenceLevel::Unreliable => "unreliable",
            ConfidenceLevel::Moderate => "moderate",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very_high",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(
            ConfidenceLevel::from_score(0.0),
            ConfidenceLevel::Unreliable
        );
        assert_eq!(
            ConfidenceLevel::from_score(0.4499),
            ConfidenceLevel::Unreliable
        );
        assert_eq!(
            ConfidenceLevel::from_score(0.45),
            ConfidenceLevel::Moderate
        );
        assert_eq!(
            ConfidenceLevel::from_score(0.65),
            ConfidenceLevel::High
        );
        assert_eq!(
            ConfidenceLevel::from_score(0.80),
            ConfidenceLevel::VeryHigh
        );
        assert_eq!(
            ConfidenceLevel::from_score(1.0),
            ConfidenceLevel::VeryHigh
        );
    }

    #[test]
    fn test_bands_are_ordered() {
        assert!(ConfidenceLevel::Unreliable < ConfidenceLevel::Moderate);
        assert!(ConfidenceLevel::Moderate < ConfidenceLevel::High);
        assert!(ConfidenceLevel::High < ConfidenceLevel::VeryHigh);
    }

    #[test]
    fn test_serializes_snake_case() {
        let json =
            serde_json::to_string(&ConfidenceLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
    }
}
