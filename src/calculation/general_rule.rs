//! General rule evaluator (Art. 19, EC 103/2019).
//!
//! The permanent post-reform rule: minimum age (65/62) plus minimum
//! contribution time (240/180 months).

use rust_decimal::Decimal;

use crate::config::GeneralRuleTable;
use crate::models::{ContributionProfile, RuleId, RuleVerdict, VerdictStatus};

/// Evaluates the general rule against a contribution profile.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::evaluate_general_rule;
/// use benefit_engine::config::RuleConfig;
/// use benefit_engine::models::{ContributionProfile, Sex};
///
/// let config = RuleConfig::default();
/// let profile = ContributionProfile {
///     sex: Sex::Male,
///     current_age: 65,
///     total_contribution_months: 240,
///     contribution_months_at_cutoff: 0,
/// };
///
/// let verdict = evaluate_general_rule(&profile, &config.general);
/// assert!(verdict.eligible);
/// ```
pub fn evaluate_general_rule(
    profile: &ContributionProfile,
    table: &GeneralRuleTable,
) -> RuleVerdict {
    let required_age = table.minimum_age.get(profile.sex);
    let required_months = table.minimum_months.get(profile.sex);

    let missing_age = required_age.saturating_sub(profile.current_age);
    let missing_months = required_months.saturating_sub(profile.total_contribution_months);

    let eligible = profile.current_age >= required_age
        && profile.total_contribution_months >= required_months;

    RuleVerdict {
        rule: RuleId::General,
        rule_name: "General Rule (Art. 19)".to_string(),
        article_ref: "Art. 19".to_string(),
        eligible,
        status: if eligible {
            VerdictStatus::Eligible
        } else {
            VerdictStatus::NotYetEligible
        },
        required_age: Some(required_age),
        required_months,
        required_points: None,
        current_points: None,
        missing_months,
        missing_age,
        missing_points: Decimal::ZERO,
        note: format!(
            "Minimum age {} plus {} months of contribution required",
            required_age, required_months
        ),
    }
}
