//! Points rule evaluator (Art. 15, EC 103/2019).
//!
//! The points score is age plus contribution time in years. There is no
//! minimum age: eligibility needs the points threshold for the reference
//! year plus the minimum contribution time (35/30 years).

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::PointsRuleTable;
use crate::models::{ContributionProfile, RuleId, RuleVerdict, VerdictStatus};

/// Evaluates the points rule against a contribution profile.
///
/// The points threshold rises by one per calendar year (96/86 in 2019,
/// capped at 105/100), so the evaluator takes the reference date whose year
/// resolves the threshold. Pure function; does not read the wall clock.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::evaluate_points_rule;
/// use benefit_engine::config::RuleConfig;
/// use benefit_engine::models::{ContributionProfile, Sex};
/// use chrono::NaiveDate;
///
/// let config = RuleConfig::default();
/// let reference = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
///
/// // 62 years + 492/12 = 41 contribution years = 103 points, the 2026
/// // male threshold, with contribution time above the 420-month minimum.
/// let profile = ContributionProfile {
///     sex: Sex::Male,
///     current_age: 62,
///     total_contribution_months: 492,
///     contribution_months_at_cutoff: 400,
/// };
///
/// let verdict = evaluate_points_rule(&profile, &config.points, reference);
/// assert!(verdict.eligible);
/// ```
pub fn evaluate_points_rule(
    profile: &ContributionProfile,
    table: &PointsRuleTable,
    reference_date: NaiveDate,
) -> RuleVerdict {
    let required_points = table.required_points(profile.sex, reference_date.year());
    let required_months = table.minimum_months.get(profile.sex);

    let contribution_years =
        Decimal::from(profile.total_contribution_months) / Decimal::from(12);
    let current_points = Decimal::from(profile.current_age) + contribution_years;

    let missing_points =
        (Decimal::from(required_points) - current_points).max(Decimal::ZERO);
    let missing_months = required_months.saturating_sub(profile.total_contribution_months);

    let eligible = current_points >= Decimal::from(required_points)
        && profile.total_contribution_months >= required_months;

    RuleVerdict {
        rule: RuleId::Points,
        rule_name: "Points Rule (Art. 15)".to_string(),
        article_ref: "Art. 15".to_string(),
        eligible,
        status: if eligible {
            VerdictStatus::Eligible
        } else {
            VerdictStatus::NotYetEligible
        },
        required_age: None,
        required_months,
        required_points: Some(required_points),
        current_points: Some(current_points),
        missing_months,
        missing_age: 0,
        missing_points,
        note: format!(
            "No minimum age; {} points plus {} months of contribution required",
            required_points, required_months
        ),
    }
}
