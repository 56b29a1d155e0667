//! 50% toll rule evaluator (Art. 17, EC 103/2019).
//!
//! For workers who already had contribution time at the reform cutoff date
//! (2019-11-13): the pre-reform requirement (420/360 months) plus a toll of
//! half the shortfall that existed at the cutoff, with a minimum age of
//! 61/56. A worker with no contribution time at the cutoff is never
//! eligible under this rule.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::TollRuleTable;
use crate::models::{ContributionProfile, RuleId, RuleVerdict, VerdictStatus};

/// Evaluates the 50% toll rule against a contribution profile.
///
/// The toll is ceil(shortfall-at-cutoff × 0.5), added on top of the
/// pre-reform requirement.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::evaluate_toll50_rule;
/// use benefit_engine::config::RuleConfig;
/// use benefit_engine::models::{ContributionProfile, Sex};
///
/// let config = RuleConfig::default();
///
/// // 20 months short at the cutoff: toll is 10, total required 430.
/// let profile = ContributionProfile {
///     sex: Sex::Male,
///     current_age: 61,
///     total_contribution_months: 430,
///     contribution_months_at_cutoff: 400,
/// };
///
/// let verdict = evaluate_toll50_rule(&profile, &config.toll_50);
/// assert!(verdict.eligible);
/// assert_eq!(verdict.required_months, 430);
/// ```
pub fn evaluate_toll50_rule(profile: &ContributionProfile, table: &TollRuleTable) -> RuleVerdict {
    let required_age = table.minimum_age.get(profile.sex);
    let pre_reform_months = table.pre_reform_months.get(profile.sex);

    let shortfall_at_cutoff =
        pre_reform_months.saturating_sub(profile.contribution_months_at_cutoff);
    let toll = ceil_half(shortfall_at_cutoff);
    let total_required = pre_reform_months + toll;

    let had_time_at_cutoff = profile.contribution_months_at_cutoff > 0;
    let eligible = profile.current_age >= required_age
        && profile.total_contribution_months >= total_required
        && had_time_at_cutoff;

    let missing_age = required_age.saturating_sub(profile.current_age);
    let missing_months = total_required.saturating_sub(profile.total_contribution_months);

    let note = if had_time_at_cutoff {
        format!(
            "Toll of {} months (50% of the {}-month shortfall at the cutoff date)",
            toll, shortfall_at_cutoff
        )
    } else {
        "No contribution time at the cutoff date; rule does not apply".to_string()
    };

    RuleVerdict {
        rule: RuleId::Toll50,
        rule_name: "50% Toll Rule (Art. 17)".to_string(),
        article_ref: "Art. 17".to_string(),
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

/// ceil(months × 0.5), computed in decimal arithmetic to mirror the
/// statutory formula.
fn ceil_half(months: u32) -> u32 {
    (Decimal::from(months) * Decimal::new(5, 1))
        .ceil()
        .to_u32()
        .unwrap_or(u32::MAX)
}
