//! Closed platform and build-tool identities.
//!
//! Every module that needs to talk about "which ecosystem" does so through
//! these enums. External text enters through [`Platform::from_name`], the
//! single normalization point, rather than ad hoc string comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported language/ecosystem identities.
///
/// `Unknown` is a real member of the result model: an all-zero scan
/// reports it with a confidence of 0.0 rather than failing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Platform {
    #[serde(rename = "Java")]
    Java,
    #[serde(rename = "Node.js")]
    NodeJs,
    #[serde(rename = "Python")]
    Python,
    #[serde(rename = ".NET")]
    DotNet,
    #[serde(rename = "Go")]
    Go,
    #[serde(rename = "Rust")]
    Rust,
    #[serde(rename = "PHP")]
    Php,
    #[serde(rename = "Ruby")]
    Ruby,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Platform {
    /// Detectable platforms in catalog order. Ties in the final ranking
    /// preserve this order.
    pub const ALL: [Platform; 8] = [
        Platform::Java,
        Platform::NodeJs,
        Platform::Python,
        Platform::DotNet,
        Platform::Go,
        Platform::Rust,
        Platform::Php,
        Platform::Ruby,
    ];

    /// Human-readable display name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Java => "Java",
            Platform::NodeJs => "Node.js",
            Platform::Python => "Python",
            Platform::DotNet => ".NET",
            Platform::Go => "Go",
            Platform::Rust => "Rust",
            Platform::Php => "PHP",
            Platform::Ruby => "Ruby",
            Platform::Unknown => "Unknown",
        }
    }

    /// Normalize an external platform string to its canonical identity.
    ///
    /// Accepts both the display names and common short identifiers
    /// (e.g. "nodejs", "node", "dotnet"). Unrecognized input maps to
    /// [`Platform::Unknown`]; there is no error path.
    pub fn from_name(name: &str) -> Platform {
        match name.trim().to_lowercase().as_str() {
            "java" => Platform::Java,
            "nodejs" | "node.js" | "node" => Platform::NodeJs,
            "python" => Platform::Python,
            "dotnet" | ".net" | "csharp" | "c#" => Platform::DotNet,
            "go" | "golang" => Platform::Go,
            "rust" => Platform::Rust,
            "php" => Platform::Php,
            "ruby" => Platform::Ruby,
            _ => Platform::Unknown,
        }
    }

    /// Whether this platform requires a compile/build step before its
    /// artifacts can run. Intrinsic to the platform, not derived from
    /// file evidence.
    pub fn build_required(&self) -> bool {
        matches!(
            self,
            Platform::Java
                | Platform::NodeJs
                | Platform::DotNet
                | Platform::Go
                | Platform::Rust
        )
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build tools the engine can infer from file evidence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum BuildTool {
    #[serde(rename = "Maven")]
    Maven,
    #[serde(rename = "Gradle")]
    Gradle,
    #[serde(rename = "npm")]
    Npm,
    #[serde(rename = "yarn")]
    Yarn,
    #[serde(rename = "pnpm")]
    Pnpm,
    #[serde(rename = "pip")]
    Pip,
    #[serde(rename = "dotnet")]
    Dotnet,
    #[serde(rename = "go")]
    Go,
    #[serde(rename = "cargo")]
    Cargo,
    #[serde(rename = "composer")]
    Composer,
    #[serde(rename = "bundle")]
    Bundler,
}

impl BuildTool {
    /// Tool name as it appears on the command line / wire.
    pub fn name(&self) -> &'static str {
        match self {
            BuildTool::Maven => "Maven",
            BuildTool::Gradle => "Gradle",
            BuildTool::Npm => "npm",
            BuildTool::Yarn => "yarn",
            BuildTool::Pnpm => "pnpm",
            BuildTool::Pip => "pip",
            BuildTool::Dotnet => "dotnet",
            BuildTool::Go => "go",
            BuildTool::Cargo => "cargo",
            BuildTool::Composer => "composer",
            BuildTool::Bundler => "bundle",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_common_aliases() {
        assert_eq!(Platform::from_name("Node.js"), Platform::NodeJs);
        assert_eq!(Platform::from_name("nodejs"), Platform::NodeJs);
        assert_eq!(Platform::from_name(".NET"), Platform::DotNet);
        assert_eq!(Platform::from_name("  rust "), Platform::Rust);
        assert_eq!(Platform::from_name("cobol"), Platform::Unknown);
    }

    #[test]
    fn test_display_names_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_name(platform.name()), platform);
        }
    }

    #[test]
    fn test_build_required_is_platform_intrinsic() {
        assert!(Platform::Java.build_required());
        assert!(Platform::Rust.build_required());
        assert!(!Platform::Python.build_required());
        assert!(!Platform::Php.build_required());
        assert!(!Platform::Ruby.build_required());
        assert!(!Platform::Unknown.build_required());
    }

    #[test]
    fn test_serialized_platform_uses_display_name() {
        let json = serde_json::to_string(&Platform::NodeJs).unwrap();
        assert_eq!(json, "\"Node.js\"");
        let json = serde_json::to_string(&BuildTool::Npm).unwrap();
        assert_eq!(json, "\"npm\"");
    }
}
