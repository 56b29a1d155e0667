//! Integration tests for the Benefit Eligibility Rule Engine.
//!
//! These tests exercise the full evaluation path end to end:
//! - Transition-rule evaluation and best-rule selection
//! - Hazardous-exposure conversion and advisory validation
//! - Grace-period classification per insured category
//! - Claim-value estimation
//! - Configuration loading from the shipped YAML table

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use benefit_engine::calculation::{
    BenefitType, check_waiting_period, convert_hazard_time, estimate_claim_value,
    evaluate_grace_period, evaluate_transition_rules, format_months, to_months,
};
use benefit_engine::config::RuleConfig;
use benefit_engine::models::{
    ContributionProfile, InsuredCategory, RuleId, Sex, VerdictStatus,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::from_str(s).unwrap()
}

fn reference_date() -> NaiveDate {
    date("2026-01-01")
}

fn profile(sex: Sex, age: u32, months: u32, at_cutoff: u32) -> ContributionProfile {
    ContributionProfile {
        sex,
        current_age: age,
        total_contribution_months: months,
        contribution_months_at_cutoff: at_cutoff,
    }
}

// =============================================================================
// Transition-rule scenarios
// =============================================================================

#[test]
fn general_rule_only_candidate_wins() {
    // Age 65, exactly 240 months, nothing at the cutoff: the general rule
    // is met and both toll rules are ruled out.
    let config = RuleConfig::default();
    let p = profile(Sex::Male, 65, 240, 0);

    let report = evaluate_transition_rules(&p, &config, reference_date()).unwrap();

    assert_eq!(report.best_verdict.rule, RuleId::General);
    assert!(report.best_verdict.eligible);
    assert_eq!(report.best_verdict.status, VerdictStatus::Eligible);
    assert_eq!(report.eligible_count, 1);
    assert_eq!(report.total_count, 4);

    let toll_50 = &report.all_verdicts[2];
    let toll_100 = &report.all_verdicts[3];
    assert_eq!(toll_50.rule, RuleId::Toll50);
    assert!(!toll_50.eligible);
    assert_eq!(toll_100.rule, RuleId::Toll100);
    assert!(!toll_100.eligible);
}

#[test]
fn long_career_meets_several_rules_at_once() {
    // 66 years old with 38+ contribution years, fully vested at the cutoff.
    let config = RuleConfig::default();
    let p = profile(Sex::Male, 66, 460, 420);

    let report = evaluate_transition_rules(&p, &config, reference_date()).unwrap();

    assert_eq!(report.eligible_count, 4);
    assert!(report.best_verdict.eligible);
    // All scores are zero, so evaluation order breaks the tie.
    assert_eq!(report.best_verdict.rule, RuleId::Points);
}

#[test]
fn toll_50_applies_when_only_slightly_short_at_cutoff() {
    // Female, 350 of 360 months at the cutoff: toll 5, total 365.
    let config = RuleConfig::default();
    let p = profile(Sex::Female, 56, 365, 350);

    let report = evaluate_transition_rules(&p, &config, reference_date()).unwrap();

    assert!(report.eligible_verdicts.iter().any(|v| v.rule == RuleId::Toll50));
    assert_eq!(report.best_verdict.rule, RuleId::Toll50);
}

#[test]
fn nobody_eligible_returns_closest_rule() {
    let config = RuleConfig::default();
    let p = profile(Sex::Female, 61, 175, 0);

    let report = evaluate_transition_rules(&p, &config, reference_date()).unwrap();

    assert_eq!(report.eligible_count, 0);
    assert_eq!(
        report.best_verdict.status,
        VerdictStatus::ClosestNotYetEligible
    );
    // General rule: 1 year of age and 5 months short, by far the closest.
    assert_eq!(report.best_verdict.rule, RuleId::General);
    assert_eq!(report.best_verdict.missing_age, 1);
    assert_eq!(report.best_verdict.missing_months, 5);
}

#[test]
fn implausible_cutoff_contribution_warns_but_evaluates() {
    let config = RuleConfig::default();
    let p = profile(Sex::Male, 60, 100, 300);

    let report = evaluate_transition_rules(&p, &config, reference_date()).unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].code, "CUTOFF_EXCEEDS_TOTAL");
    assert_eq!(report.all_verdicts.len(), 4);
}

#[test]
fn report_round_trips_through_json() {
    let config = RuleConfig::default();
    let p = profile(Sex::Male, 65, 240, 0);

    let report = evaluate_transition_rules(&p, &config, reference_date()).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let deserialized: benefit_engine::models::EligibilityReport =
        serde_json::from_str(&json).unwrap();
    assert_eq!(report, deserialized);
}

// =============================================================================
// Hazardous-exposure conversion
// =============================================================================

#[test]
fn hazard_conversion_full_scenario() {
    let config = RuleConfig::default();
    let result = convert_hazard_time(
        120,
        96,
        100,
        Some(date("2005-06-01")),
        reference_date(),
        &config.hazard,
    );

    assert_eq!(result.hazard_months_converted_male, 140);
    assert_eq!(result.hazard_months_converted_female, 120);
    assert_eq!(result.total_male, 356);
    assert_eq!(result.total_female, 336);
    assert_eq!(result.exposure_months, Some(247));
    assert!(result.validation.alerts.is_empty());
}

#[test]
fn hazard_at_limit_boundary_is_clean() {
    let config = RuleConfig::default();
    let result = convert_hazard_time(0, 0, 300, None, reference_date(), &config.hazard);

    assert!(!result.validation.exceeds_month_limit);
    assert!(result.validation.alerts.is_empty());
}

#[test]
fn hazard_over_limit_and_pre_regime_start_raises_both_alerts() {
    let config = RuleConfig::default();
    let result = convert_hazard_time(
        0,
        0,
        360,
        Some(date("1990-01-01")),
        reference_date(),
        &config.hazard,
    );

    assert!(result.validation.exceeds_month_limit);
    assert!(result.validation.starts_before_regime_threshold);
    assert_eq!(result.validation.alerts.len(), 2);
    // Still converted: flags are advisory, not failures.
    assert_eq!(result.hazard_months_converted_male, 504);
}

// =============================================================================
// Grace period
// =============================================================================

#[test]
fn rural_pure_insured_never_lapses() {
    let config = RuleConfig::default();
    let last = reference_date() - chrono::Duration::days(10_000);

    let result = evaluate_grace_period(
        InsuredCategory::RuralPure,
        last,
        reference_date(),
        config.grace_window_days,
    );

    assert!(result.valid);
    assert_eq!(result.elapsed_days, 10_000);
    assert_eq!(result.remaining_days, None);
}

#[test]
fn urban_insured_lapses_the_day_after_the_window() {
    let config = RuleConfig::default();
    let last = reference_date() - chrono::Duration::days(366);

    let result = evaluate_grace_period(
        InsuredCategory::Urban,
        last,
        reference_date(),
        config.grace_window_days,
    );

    assert!(!result.valid);
    assert_eq!(result.remaining_days, Some(0));
}

// =============================================================================
// Claim value and waiting period
// =============================================================================

#[test]
fn claim_value_matches_statutory_formula() {
    assert_eq!(estimate_claim_value(12, dec("2500.00")), dec("60000.00"));
    assert_eq!(estimate_claim_value(0, dec("2500.00")), dec("1000.00"));
}

#[test]
fn waiting_period_for_age_retirement() {
    let result = check_waiting_period(BenefitType::AgeRetirement, 179);
    assert!(!result.met);
    assert_eq!(result.missing_contributions, 1);
}

// =============================================================================
// Time normalization end to end
// =============================================================================

#[test]
fn ambiguous_contribution_time_normalizes_before_evaluation() {
    // A caller reporting "35" with no unit means 35 years under the
    // inherited heuristic; normalized it satisfies the points-rule time
    // minimum exactly.
    let config = RuleConfig::default();
    let months = to_months(35, None);
    assert_eq!(months, 420);

    let p = profile(Sex::Male, 68, months, 420);
    let report = evaluate_transition_rules(&p, &config, reference_date()).unwrap();
    assert!(report.best_verdict.eligible);

    assert_eq!(format_months(months).display, "35 years");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn shipped_yaml_table_drives_the_same_verdicts_as_defaults() {
    let shipped = RuleConfig::load("./config/ec103/rules.yaml").unwrap();
    let default = RuleConfig::default();
    let p = profile(Sex::Female, 62, 180, 0);

    let from_shipped = evaluate_transition_rules(&p, &shipped, reference_date()).unwrap();
    let from_default = evaluate_transition_rules(&p, &default, reference_date()).unwrap();

    assert_eq!(from_shipped.all_verdicts, from_default.all_verdicts);
    assert_eq!(from_shipped.best_verdict.rule, from_default.best_verdict.rule);
}

#[test]
fn unknown_tags_are_rejected_not_coerced() {
    assert!("other".parse::<Sex>().is_err());
    assert!("astronaut".parse::<InsuredCategory>().is_err());
}
