//! 100% toll rule evaluator (Art. 20, EC 103/2019).
//!
//! Structured like the 50% toll rule, but the toll is the full shortfall
//! that existed at the cutoff date, in exchange for a lower minimum age
//! (60/57).

use rust_decimal::Decimal;

use crate::config::TollRuleTable;
use crate::models::{ContributionProfile, RuleId, RuleVerdict, VerdictStatus};

/// Evaluates the 100% toll rule against a contribution profile.
///
/// The toll equals the shortfall at the cutoff date, so the total
/// requirement is the pre-reform months plus that shortfall. A worker with
/// no contribution time at the cutoff is never eligible under this rule.
pub fn evaluate_toll100_rule(profile: &ContributionProfile, table: &TollRuleTable) -> RuleVerdict {
    let required_age = table.minimum_age.get(profile.sex);
    let pre_reform_months = table.pre_reform_months.get(profile.sex);

    let shortfall_at_cutoff =
        pre_reform_months.saturating_sub(profile.contribution_months_at_cutoff);
    let toll = shortfall_at_cutoff;
    let total_required = pre_reform_months + toll;

    let had_time_at_cutoff = profile.contribution_months_at_cutoff > 0;
    let eligible = profile.current_age >= required_age
        && profile.total_contribution_months >= total_required
        && had_time_at_cutoff;

    let missing_age = required_age.saturating_sub(profile.current_age);
    let missing_months = total_required.saturating_sub(profile.total_contribution_months);

    let note = if had_time_at_cutoff {
        format!(
            "Toll of {} months (100% of the shortfall at the cutoff date)",
            toll
        )
    } else {
        "No contribution time at the cutoff date; rule does not apply".to_string()
    };

    RuleVerdict {
        rule: RuleId::Toll100,
        rule_name: "100% Toll Rule (Art. 20)".to_string(),
        article_ref: "Art. 20".to_string(),
        eligible,
        status: if eligible {
            VerdictStatus::Eligible
        } else {
            VerdictStatus::NotYetEligible
        },
        required_age: Some(required_age),
        required_months: total_required,
        required_points: None,
        current_points: None,
        missing_months,
        missing_age,
        missing_points: Decimal::ZERO,
        note,
    }
}
