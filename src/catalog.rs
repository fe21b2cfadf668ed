//! Static detection rule catalog.
//!
//! The catalog describes, per platform, which file names, directory
//! shapes, configuration files, framework triggers, and content patterns
//! count as evidence, plus how build tooling and commands are inferred
//! from that evidence. It is process-wide, read-only data with no
//! runtime mutation path.
pub mod platform;
pub mod rules;

pub use platform::{BuildTool, Platform};
pub use rules::{
    BuildToolRule, CommandRule, ContentRule, FrameworkRule,
    FrameworkSource, IGNORED_DIRS, RuleSet, SCORE_WEIGHTS, ScoreWeights,
    catalog, rules_for,
};
