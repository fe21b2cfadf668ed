//! Weighted aggregation of signal counts into a detection result.

use crate::catalog::{BuildTool, RuleSet, ScoreWeights};
use crate::detector::confidence::ConfidenceLevel;
use crate::detector::evaluator::Evaluation;
use crate::detector::types::DetectionResult;

/// Convert an evaluation into a scored [`DetectionResult`].
///
/// The primary and framework signals contribute their full weight on
/// any hit. The counting categories contribute
/// `min(hits * weight / 2, weight)`: a single hit earns half credit and
/// two or more saturate the category, so corroborating evidence is
/// rewarded without letting one noisy match dominate. The total is
/// clamped to 1.0 as a hard invariant.
pub fn aggregate(
    eval: Evaluation,
    weights: &ScoreWeights,
    rules: &'static RuleSet,
) -> DetectionResult {
    let signals = eval.signals;
    let mut score = 0.0;

    if signals.primary_hit {
        score += weights.primary;
    }
    score += scaled(signals.secondary_hits, weights.secondary);
    score += scaled(signals.structure_hits, weights.structure);
    score += scaled(signals.config_hits, weights.config);
    score += scaled(signals.content_hits, weights.content);
    if eval.framework.is_some() {
        score += weights.framework;
    }

    let score = score.min(1.0);

    let build_command = resolve_build_command(rules, eval.build_tool);

    DetectionResult {
        language: eval.platform,
        framework: eval.framework.map(str::to_string),
        build_tool: eval.build_tool,
        build_required: eval.platform.build_required(),
        build_command,
        install_command: rules
            .install_command
            .map(str::to_string),
        confidence_score: score,
        confidence_level: ConfidenceLevel::from_score(score),
        detected_files: eval.detected_files,
    }
}

fn scaled(hits: usize, weight: f64) -> f64 {
    (hits as f64 * (weight / 2.0)).min(weight)
}

/// Look up the command for the inferred tool. When no tool was
/// inferred but the platform defines exactly one command, that command
/// is the fallback.
fn resolve_build_command(
    rules: &'static RuleSet,
    tool: Option<BuildTool>,
) -> Option<String> {
    if let Some(tool) = tool {
        let command = rules
            .build_commands
            .iter()
            .find(|c| c.tool == tool)
            .map(|c| c.command.to_string());
        if command.is_some() {
            return command;
        }
    }

    if tool.is_none() && rules.build_commands.len() == 1 {
        return Some(rules.build_commands[0].command.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        BuildTool, Platform, SCORE_WEIGHTS, rules_for,
    };
    use crate::detector::evaluator::SignalCounts;

    fn eval_for(
        platform: Platform,
        signals: SignalCounts,
    ) -> Evaluation {
        Evaluation {
            platform,
            signals,
            framework: None,
            build_tool: None,
            detected_files: vec![],
        }
    }

    #[test]
    fn test_primary_weight_does_not_scale_with_count() {
        let rules = rules_for(Platform::Java).unwrap();
        let signals = SignalCounts {
            primary_hit: true,
            ..Default::default()
        };
        let result =
            aggregate(eval_for(Platform::Java, signals), &SCORE_WEIGHTS, rules);
        assert_eq!(result.confidence_score, SCORE_WEIGHTS.primary);
    }

    #[test]
    fn test_counting_categories_saturate_at_two_hits() {
        let rules = rules_for(Platform::Python).unwrap();

        let one = SignalCounts {
            secondary_hits: 1,
            ..Default::default()
        };
        let result =
            aggregate(eval_for(Platform::Python, one), &SCORE_WEIGHTS, rules);
        assert!(
            (result.confidence_score - SCORE_WEIGHTS.secondary / 2.0)
                .abs()
                < 1e-9
        );

        for hits in [2, 3, 8] {
            let many = SignalCounts {
                secondary_hits: hits,
                ..Default::default()
            };
            let result = aggregate(
                eval_for(Platform::Python, many),
                &SCORE_WEIGHTS,
                rules,
            );
            assert!(
                (result.confidence_score - SCORE_WEIGHTS.secondary)
                    .abs()
                    < 1e-9,
                "{hits} hits must saturate the category"
            );
        }
    }

    #[test]
    fn test_framework_adds_full_weight() {
        let rules = rules_for(Platform::Rust).unwrap();
        let mut eval =
            eval_for(Platform::Rust, SignalCounts::default());
        eval.framework = Some("Axum");
        let result = aggregate(eval, &SCORE_WEIGHTS, rules);
        assert_eq!(result.confidence_score, SCORE_WEIGHTS.framework);
        assert_eq!(result.framework.as_deref(), Some("Axum"));
    }

    #[test]
    fn test_score_is_clamped_to_one() {
        let rules = rules_for(Platform::Java).unwrap();
        let heavy = ScoreWeights {
            primary: 0.9,
            secondary: 0.9,
            structure: 0.9,
            config: 0.9,
            framework: 0.9,
            content: 0.9,
        };
        let signals = SignalCounts {
            primary_hit: true,
            secondary_hits: 5,
            structure_hits: 5,
            config_hits: 5,
            content_hits: 5,
        };
        let result =
            aggregate(eval_for(Platform::Java, signals), &heavy, rules);
        assert_eq!(result.confidence_score, 1.0);
    }

    #[test]
    fn test_build_command_resolved_from_tool() {
        let rules = rules_for(Platform::Java).unwrap();
        let mut eval = eval_for(
            Platform::Java,
            SignalCounts {
                primary_hit: true,
                ..Default::default()
            },
        );
        eval.build_tool = Some(BuildTool::Gradle);
        let result = aggregate(eval, &SCORE_WEIGHTS, rules);
        assert_eq!(
            result.build_command.as_deref(),
            Some("gradle build")
        );
    }

    #[test]
    fn test_single_command_fallback_without_tool() {
        let rules = rules_for(Platform::Go).unwrap();
        let result = aggregate(
            eval_for(Platform::Go, SignalCounts::default()),
            &SCORE_WEIGHTS,
            rules,
        );
        // Go defines exactly one command.
        assert_eq!(result.build_command.as_deref(), Some("go build"));
    }

    #[test]
    fn test_no_fallback_with_multiple_commands() {
        let rules = rules_for(Platform::Java).unwrap();
        let result = aggregate(
            eval_for(Platform::Java, SignalCounts::default()),
            &SCORE_WEIGHTS,
            rules,
        );
        assert_eq!(result.build_command, None);
    }

    #[test]
    fn test_dependency_only_platform_reports_install_only() {
        let rules = rules_for(Platform::Php).unwrap();
        let result = aggregate(
            eval_for(Platform::Php, SignalCounts::default()),
            &SCORE_WEIGHTS,
            rules,
        );
        assert_eq!(result.build_command, None);
        assert_eq!(
            result.install_command.as_deref(),
            Some("composer install")
        );
        assert!(!result.build_required);
    }

    #[test]
    fn test_level_is_derived_from_score() {
        let rules = rules_for(Platform::NodeJs).unwrap();
        let signals = SignalCounts {
            primary_hit: true,
            secondary_hits: 2,
            structure_hits: 2,
            config_hits: 2,
            content_hits: 2,
        };
        let mut eval = eval_for(Platform::NodeJs, signals);
        eval.framework = Some("React");
        let result = aggregate(eval, &SCORE_WEIGHTS, rules);
        assert_eq!(
            result.confidence_level,
            ConfidenceLevel::from_score(result.confidence_score)
        );
    }
}
