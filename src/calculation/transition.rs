//! Transition-rule evaluation entry point.
//!
//! Runs the four EC 103/2019 rule evaluators against a contribution profile
//! and reduces their verdicts to an [`EligibilityReport`].

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::config::RuleConfig;
use crate::error::EngineResult;
use crate::models::{ContributionProfile, EligibilityReport, EvaluationWarning};

use super::{
    evaluate_general_rule, evaluate_points_rule, evaluate_toll50_rule, evaluate_toll100_rule,
    select_best_verdict,
};

/// The engine version stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluates all four transition rules and selects the best candidate.
///
/// The evaluators run independently against the same profile, in a fixed
/// order: points, general, toll-50, toll-100. `reference_date` resolves the
/// year of the progressive points threshold; no wall clock is read, so the
/// evaluation is deterministic and safe to call concurrently.
///
/// Implausible input (cutoff-date contribution above the current total) is
/// reported as a warning on the result, not rejected: the engine's job is
/// to report, not to adjudicate.
///
/// # Errors
///
/// Only [`crate::error::EngineError::EmptyVerdictSet`] can propagate from
/// the selector, and the four evaluators make that unreachable in practice.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::evaluate_transition_rules;
/// use benefit_engine::config::RuleConfig;
/// use benefit_engine::models::{ContributionProfile, RuleId, Sex};
/// use chrono::NaiveDate;
///
/// let config = RuleConfig::default();
/// let reference = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
///
/// let profile = ContributionProfile {
///     sex: Sex::Male,
///     current_age: 65,
///     total_contribution_months: 240,
///     contribution_months_at_cutoff: 0,
/// };
///
/// let report = evaluate_transition_rules(&profile, &config, reference)?;
/// assert_eq!(report.best_verdict.rule, RuleId::General);
/// assert_eq!(report.total_count, 4);
/// # Ok::<(), benefit_engine::error::EngineError>(())
/// ```
pub fn evaluate_transition_rules(
    profile: &ContributionProfile,
    config: &RuleConfig,
    reference_date: NaiveDate,
) -> EngineResult<EligibilityReport> {
    debug!(
        sex = %profile.sex,
        age = profile.current_age,
        months = profile.total_contribution_months,
        "evaluating transition rules"
    );

    let all_verdicts = vec![
        evaluate_points_rule(profile, &config.points, reference_date),
        evaluate_general_rule(profile, &config.general),
        evaluate_toll50_rule(profile, &config.toll_50),
        evaluate_toll100_rule(profile, &config.toll_100),
    ];

    let eligible_verdicts: Vec<_> = all_verdicts
        .iter()
        .filter(|v| v.eligible)
        .cloned()
        .collect();

    let best_verdict = select_best_verdict(&all_verdicts)?;

    let mut warnings = Vec::new();
    if profile.cutoff_exceeds_total() {
        warnings.push(EvaluationWarning {
            code: "CUTOFF_EXCEEDS_TOTAL".to_string(),
            message: format!(
                "Contribution at the cutoff date ({} months) exceeds the current total ({} months)",
                profile.contribution_months_at_cutoff, profile.total_contribution_months
            ),
            severity: "medium".to_string(),
        });
    }

    let eligible_count = eligible_verdicts.len();
    let total_count = all_verdicts.len();

    debug!(
        best = %best_verdict.rule,
        eligible = eligible_count,
        "transition-rule evaluation complete"
    );

    Ok(EligibilityReport {
        evaluation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        all_verdicts,
        eligible_verdicts,
        best_verdict,
        eligible_count,
        total_count,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RuleId, Sex, VerdictStatus};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn profile(sex: Sex, age: u32, months: u32, at_cutoff: u32) -> ContributionProfile {
        ContributionProfile {
            sex,
            current_age: age,
            total_contribution_months: months,
            contribution_months_at_cutoff: at_cutoff,
        }
    }

    #[test]
    fn test_verdicts_preserve_evaluation_order() {
        let config = RuleConfig::default();
        let report =
            evaluate_transition_rules(&profile(Sex::Male, 50, 100, 0), &config, reference())
                .unwrap();

        let order: Vec<RuleId> = report.all_verdicts.iter().map(|v| v.rule).collect();
        assert_eq!(
            order,
            vec![RuleId::Points, RuleId::General, RuleId::Toll50, RuleId::Toll100]
        );
        assert_eq!(report.total_count, 4);
    }

    #[test]
    fn test_general_rule_only_scenario() {
        // Age 65 with exactly 240 months and nothing at the cutoff: only
        // the general rule applies.
        let config = RuleConfig::default();
        let report =
            evaluate_transition_rules(&profile(Sex::Male, 65, 240, 0), &config, reference())
                .unwrap();

        assert_eq!(report.best_verdict.rule, RuleId::General);
        assert!(report.best_verdict.eligible);
        assert_eq!(report.eligible_count, 1);

        // Both toll rules are ruled out by the zero cutoff contribution.
        assert!(!report.all_verdicts[2].eligible);
        assert!(!report.all_verdicts[3].eligible);
    }

    #[test]
    fn test_nobody_eligible_marks_closest() {
        let config = RuleConfig::default();
        let report =
            evaluate_transition_rules(&profile(Sex::Male, 64, 230, 0), &config, reference())
                .unwrap();

        assert_eq!(report.eligible_count, 0);
        assert!(report.eligible_verdicts.is_empty());
        assert_eq!(
            report.best_verdict.status,
            VerdictStatus::ClosestNotYetEligible
        );
        // General rule: 1 year of age + 10 months short = 11, the smallest
        // combined shortfall of the four.
        assert_eq!(report.best_verdict.rule, RuleId::General);
    }

    #[test]
    fn test_eligible_subsequence_matches_flags() {
        let config = RuleConfig::default();
        // Old enough and long enough for several rules at once.
        let report =
            evaluate_transition_rules(&profile(Sex::Male, 66, 460, 420), &config, reference())
                .unwrap();

        assert!(report.eligible_count >= 2);
        assert_eq!(report.eligible_verdicts.len(), report.eligible_count);
        assert!(report.eligible_verdicts.iter().all(|v| v.eligible));
        assert!(report.best_verdict.eligible);
    }

    #[test]
    fn test_implausible_cutoff_raises_warning_not_error() {
        let config = RuleConfig::default();
        let report =
            evaluate_transition_rules(&profile(Sex::Male, 60, 100, 200), &config, reference())
                .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, "CUTOFF_EXCEEDS_TOTAL");
    }

    #[test]
    fn test_plausible_profile_has_no_warnings() {
        let config = RuleConfig::default();
        let report =
            evaluate_transition_rules(&profile(Sex::Female, 60, 300, 280), &config, reference())
                .unwrap();

        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_report_metadata_is_stamped() {
        let config = RuleConfig::default();
        let report =
            evaluate_transition_rules(&profile(Sex::Male, 65, 240, 0), &config, reference())
                .unwrap();

        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
        assert!(!report.evaluation_id.is_nil());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let config = RuleConfig::default();
        let report =
            evaluate_transition_rules(&profile(Sex::Male, 65, 240, 0), &config, reference())
                .unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"best_verdict\""));
        assert!(json.contains("\"all_verdicts\""));
        assert!(json.contains("\"eligible_count\":1"));
    }
}
