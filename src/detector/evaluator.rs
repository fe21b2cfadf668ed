//! Per-platform signal evaluation.
//!
//! For one platform and one scanned file list, computes the independent
//! signal counts the aggregator turns into a score. Evaluation is
//! read-only over the tree; every per-file failure (unreadable, binary,
//! malformed manifest) degrades to "no signal" and never propagates.

use log::debug;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::catalog::{
    BuildTool, BuildToolRule, FrameworkSource, Platform, RuleSet,
};

/// Bytes read from any single file during content or descriptor
/// inspection. Bounds memory and time on pathological large files.
pub const CONTENT_READ_CAP: u64 = 50_000;

/// Raw signal counts for one platform, before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalCounts {
    /// At least one primary pattern matched.
    pub primary_hit: bool,
    /// Number of secondary patterns with at least one match.
    pub secondary_hits: usize,
    /// Number of structure indicators present under the root.
    pub structure_hits: usize,
    /// Number of config fragments found in discovered paths.
    pub config_hits: usize,
    /// Number of files with a content-pattern match (one per file).
    pub content_hits: usize,
}

/// Everything the evaluator learned about one platform.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub platform: Platform,
    pub signals: SignalCounts,
    pub framework: Option<&'static str>,
    pub build_tool: Option<BuildTool>,
    /// Deduplicated, sorted relative paths that contributed evidence.
    pub detected_files: Vec<String>,
}

/// Evaluate one platform's rule set against the scanned file list.
pub fn evaluate(
    rules: &'static RuleSet,
    files: &[String],
    root: &Path,
) -> Evaluation {
    let mut signals = SignalCounts::default();
    let mut detected = BTreeSet::new();
    let mut primary_matches: Vec<&str> = Vec::new();

    for pattern in rules.primary {
        let matches = pattern_matches(pattern, files);
        if !matches.is_empty() {
            signals.primary_hit = true;
            primary_matches.extend(matches.iter().copied());
            detected.extend(matches.iter().map(|m| m.to_string()));
        }
    }

    for pattern in rules.secondary {
        let matches = pattern_matches(pattern, files);
        if !matches.is_empty() {
            signals.secondary_hits += 1;
            detected.extend(matches.iter().map(|m| m.to_string()));
        }
    }

    // Structure indicators are probed on the filesystem itself: an
    // empty directory never shows up in the file list.
    for indicator in rules.structure {
        if root.join(indicator).exists() {
            signals.structure_hits += 1;
        }
    }

    for fragment in rules.config_files {
        let matches: Vec<&str> = files
            .iter()
            .filter(|f| f.contains(fragment))
            .map(|f| f.as_str())
            .collect();
        if !matches.is_empty() {
            signals.config_hits += 1;
            detected.extend(matches.iter().map(|m| m.to_string()));
        }
    }

    let content_files = match_content_files(rules, files, root);
    signals.content_hits = content_files.len();
    detected.extend(content_files);

    let framework = detect_framework(rules, files, root);
    let build_tool =
        infer_build_tool(rules, files, &primary_matches, signals);

    debug!(
        "{}: primary={} secondary={} structure={} config={} \
         content={} framework={:?} tool={:?}",
        rules.platform,
        signals.primary_hit,
        signals.secondary_hits,
        signals.structure_hits,
        signals.config_hits,
        signals.content_hits,
        framework,
        build_tool,
    );

    Evaluation {
        platform: rules.platform,
        signals,
        framework,
        build_tool,
        detected_files: detected.into_iter().collect(),
    }
}

/// Files matching a name pattern, by precedence: a leading `*` is a
/// suffix match, a pattern containing `/` is a path substring match,
/// anything else is an exact base-name match. Case-sensitive.
pub fn pattern_matches<'a>(
    pattern: &str,
    files: &'a [String],
) -> Vec<&'a str> {
    if let Some(suffix) = pattern.strip_prefix('*') {
        files
            .iter()
            .filter(|f| f.ends_with(suffix))
            .map(|f| f.as_str())
            .collect()
    } else if pattern.contains('/') {
        files
            .iter()
            .filter(|f| f.contains(pattern))
            .map(|f| f.as_str())
            .collect()
    } else {
        files
            .iter()
            .filter(|f| base_name(f) == pattern)
            .map(|f| f.as_str())
            .collect()
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Files with a content-pattern match. Each file is read at most once
/// and contributes at most one hit, even when it qualifies for several
/// pattern groups. Comparison is case-insensitive.
fn match_content_files(
    rules: &'static RuleSet,
    files: &[String],
    root: &Path,
) -> Vec<String> {
    let mut checked = BTreeSet::new();
    let mut hits = Vec::new();

    for rule in rules.content {
        for file in pattern_matches(rule.file_pattern, files) {
            if !checked.insert(file.to_string()) {
                continue;
            }
            let Some(text) = read_text_capped(&root.join(file)) else {
                continue;
            };
            let lower = text.to_lowercase();
            let matched = rule
                .substrings
                .iter()
                .any(|s| lower.contains(&s.to_lowercase()));
            if matched {
                hits.push(file.to_string());
            }
        }
    }

    hits
}

/// First framework whose triggers match, in catalog declaration order.
fn detect_framework(
    rules: &'static RuleSet,
    files: &[String],
    root: &Path,
) -> Option<&'static str> {
    match rules.framework_source {
        FrameworkSource::DependencyManifest { file, sections } => {
            let deps = manifest_dependencies(&root.join(file), sections);
            rules.frameworks.iter().find_map(|fw| {
                fw.triggers
                    .iter()
                    .any(|t| deps.contains(*t))
                    .then_some(fw.name)
            })
        }
        FrameworkSource::Descriptor(descriptors) => {
            let texts: Vec<String> = descriptors
                .iter()
                .filter_map(|d| read_text_capped(&root.join(d)))
                .collect();
            rules.frameworks.iter().find_map(|fw| {
                fw.triggers
                    .iter()
                    .any(|t| texts.iter().any(|text| text.contains(t)))
                    .then_some(fw.name)
            })
        }
        FrameworkSource::FilePaths => {
            rules.frameworks.iter().find_map(|fw| {
                fw.triggers
                    .iter()
                    .any(|t| files.iter().any(|f| f.contains(t)))
                    .then_some(fw.name)
            })
        }
    }
}

/// Dependency names declared in a JSON package manifest. A missing or
/// malformed manifest yields the empty set; no error propagates.
fn manifest_dependencies(
    path: &Path,
    sections: &[&str],
) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    let Some(text) = read_text_capped(path) else {
        return deps;
    };
    let Ok(doc) = serde_json::from_str::<Value>(&text) else {
        debug!("ignoring unparseable manifest {}", path.display());
        return deps;
    };

    for section in sections {
        if let Some(map) = doc.get(section).and_then(Value::as_object) {
            deps.extend(map.keys().cloned());
        }
    }

    deps
}

fn infer_build_tool(
    rules: &'static RuleSet,
    files: &[String],
    primary_matches: &[&str],
    signals: SignalCounts,
) -> Option<BuildTool> {
    if !signals.primary_hit {
        return None;
    }

    match rules.build_tool {
        BuildToolRule::JavaDialect => {
            if primary_matches.iter().any(|m| base_name(m) == "pom.xml")
            {
                Some(BuildTool::Maven)
            } else if primary_matches
                .iter()
                .any(|m| m.contains("gradle"))
            {
                Some(BuildTool::Gradle)
            } else {
                None
            }
        }
        BuildToolRule::NodeLockFiles => {
            if files.iter().any(|f| f.contains("pnpm-lock.yaml")) {
                Some(BuildTool::Pnpm)
            } else if files.iter().any(|f| f.contains("yarn.lock")) {
                Some(BuildTool::Yarn)
            } else {
                // package-lock.json or no lock file at all: npm.
                Some(BuildTool::Npm)
            }
        }
        BuildToolRule::Fixed(tool) => Some(tool),
    }
}

/// Read a file as text, capped at [`CONTENT_READ_CAP`] bytes, with
/// lossy UTF-8 conversion. Any I/O failure yields `None`.
fn read_text_capped(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut buf = Vec::new();
    file.take(CONTENT_READ_CAP).read_to_end(&mut buf).ok()?;
    Some(String::from_utf8_lossy(&buf).into_owned())
}
