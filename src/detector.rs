//! The detection pipeline.
//!
//! A scan is a pure read over a directory: the scanner produces a
//! bounded file list, the evaluator computes per-platform signal
//! counts, the aggregator weighs them into scores, and the selector
//! filters and ranks the candidates. Nothing here writes to the tree
//! or holds state across scans; the only shared data is the read-only
//! rule catalog.
pub mod confidence;
pub mod evaluator;
pub mod scanner;
pub mod score;
pub mod selector;
pub mod types;

pub use confidence::ConfidenceLevel;
pub use selector::detect;
pub use types::{DetectionResult, MultiDetectionResult};
