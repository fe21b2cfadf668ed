//! Buildscout classifies a source tree by inspecting its files and
//! produces ranked platform detections with confidence scores, inferred
//! build tooling, and suggested build/install commands.
//!
//! The core entry point is [`detect`], a pure function of a directory
//! and two scalar parameters. It never fails: when no platform matches
//! it reports a zero-confidence `Unknown` result instead of an error.
pub mod catalog;
pub mod cli;
pub mod command;
pub mod detector;
pub mod result;

pub use catalog::{BuildTool, Platform};
pub use detector::{
    ConfidenceLevel, DetectionResult, MultiDetectionResult, detect,
};
pub use result::Result;
