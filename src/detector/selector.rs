//! Candidate selection: runs every platform through the pipeline,
//! filters, and ranks.

use log::{debug, info};
use std::path::Path;

use crate::catalog::{SCORE_WEIGHTS, catalog};
use crate::detector::score::aggregate;
use crate::detector::types::{DetectionResult, MultiDetectionResult};
use crate::detector::{evaluator, scanner};

/// Scan a directory and rank platform candidates.
///
/// Every platform in the catalog is evaluated independently over the
/// same scanned file list; zero-score platforms are discarded. The
/// remaining candidates are filtered to `min_confidence` unless that
/// would empty the set, in which case the full non-zero set is returned
/// instead (fail-open: callers always get the best available guess and
/// can compare scores against `min_confidence_threshold` themselves).
/// A scan with no evidence at all yields a single synthetic `Unknown`
/// candidate with score 0.0.
///
/// Candidates are sorted descending by score; ties keep catalog order
/// (the sort is stable).
pub fn detect(
    root: &Path,
    max_depth: usize,
    min_confidence: f64,
) -> MultiDetectionResult {
    info!(
        "scanning {} (max_depth={}, min_confidence={})",
        root.display(),
        max_depth,
        min_confidence
    );

    let files = scanner::scan(root, max_depth);

    let candidates: Vec<DetectionResult> = catalog()
        .iter()
        .map(|rules| {
            let eval = evaluator::evaluate(rules, &files, root);
            aggregate(eval, &SCORE_WEIGHTS, rules)
        })
        .filter(|result| result.confidence_score > 0.0)
        .collect();

    let mut detections = if candidates.is_empty() {
        debug!("no platform scored; reporting unknown");
        vec![DetectionResult::unknown()]
    } else {
        let filtered: Vec<DetectionResult> = candidates
            .iter()
            .filter(|r| r.confidence_score >= min_confidence)
            .cloned()
            .collect();
        if filtered.is_empty() {
            debug!(
                "no candidate met min_confidence {}; \
                 falling back to full candidate set",
                min_confidence
            );
            candidates
        } else {
            filtered
        }
    };

    detections.sort_by(|a, b| {
        b.confidence_score.total_cmp(&a.confidence_score)
    });

    let primary = detections[0].clone();
    info!(
        "primary detection: {} ({:.2}, {})",
        primary.language,
        primary.confidence_score,
        primary.confidence_level
    );

    MultiDetectionResult {
        detections,
        primary,
        min_confidence_threshold: min_confidence,
    }
}
