//! Result types produced by a scan.

use serde::{Deserialize, Serialize};

use crate::catalog::{BuildTool, Platform};
use crate::detector::confidence::ConfidenceLevel;

/// One platform candidate with its evidence and derived facts.
///
/// Constructed fresh per scan and immutable afterward. The confidence
/// level is always the classification of `confidence_score`; it is never
/// stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Detected language/ecosystem.
    pub language: Platform,
    /// Detected framework, if any trigger matched.
    pub framework: Option<String>,
    /// Inferred build tool.
    pub build_tool: Option<BuildTool>,
    /// Whether this platform needs a build step (platform-intrinsic).
    pub build_required: bool,
    /// Suggested build command for the inferred tool.
    pub build_command: Option<String>,
    /// Suggested install command for dependency-only ecosystems.
    pub install_command: Option<String>,
    /// Aggregate weighted evidence strength in `[0, 1]`.
    pub confidence_score: f64,
    /// Ordinal band derived from the score.
    pub confidence_level: ConfidenceLevel,
    /// Deduplicated relative paths that contributed evidence.
    pub detected_files: Vec<String>,
}

impl DetectionResult {
    /// The synthetic result returned when no platform scored.
    pub fn unknown() -> Self {
        Self {
            language: Platform::Unknown,
            framework: None,
            build_tool: None,
            build_required: Platform::Unknown.build_required(),
            build_command: None,
            install_command: None,
            confidence_score: 0.0,
            confidence_level: ConfidenceLevel::from_score(0.0),
            detected_files: vec![],
        }
    }
}

/// The full outcome of one scan: every surviving candidate plus the
/// top pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiDetectionResult {
    /// Candidates in descending score order; never empty.
    pub detections: Vec<DetectionResult>,
    /// The highest-scoring candidate (`detections[0]`).
    pub primary: DetectionResult,
    /// The minimum confidence the caller asked for. Candidates may
    /// score below it when the fail-open fallback kicked in.
    pub min_confidence_threshold: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_result_is_zero_confidence() {
        let result = DetectionResult::unknown();
        assert_eq!(result.language, Platform::Unknown);
        assert_eq!(result.confidence_score, 0.0);
        assert_eq!(
            result.confidence_level,
            ConfidenceLevel::Unreliable
        );
        assert!(!result.build_required);
        assert!(result.detected_files.is_empty());
    }

    #[test]
    fn test_result_serializes_wire_names() {
        let result = DetectionResult::unknown();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["language"], "Unknown");
        assert_eq!(json["confidence_level"], "unreliable");
        assert!(json["framework"].is_null());
    }
}
