//! Verdict and report models for transition-rule evaluation.
//!
//! This module contains the [`RuleVerdict`] produced by each rule evaluator
//! and the aggregate [`EligibilityReport`] returned by the engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one of the four EC 103/2019 transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Points rule (Art. 15): age + contribution years against a yearly
    /// increasing points threshold.
    Points,
    /// General rule (Art. 19): minimum age plus minimum contribution time.
    General,
    /// 50% toll rule (Art. 17): pre-reform requirement plus half the
    /// shortfall at the cutoff date.
    Toll50,
    /// 100% toll rule (Art. 20): pre-reform requirement plus the full
    /// shortfall at the cutoff date.
    Toll100,
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleId::Points => write!(f, "points_rule"),
            RuleId::General => write!(f, "general_rule"),
            RuleId::Toll50 => write!(f, "toll_50"),
            RuleId::Toll100 => write!(f, "toll_100"),
        }
    }
}

/// The eligibility status carried by a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    /// All requirements of the rule are met.
    Eligible,
    /// One or more requirements are still outstanding.
    NotYetEligible,
    /// Not eligible, but the closest of the four rules to being met.
    /// Applied by the selector, never by an evaluator.
    ClosestNotYetEligible,
}

/// The eligibility verdict for a single transition rule.
///
/// A verdict is immutable once produced; it records the thresholds that were
/// applied and the positive shortfall against each of them (zero when a
/// requirement is already met). Thresholds that a rule does not use are
/// `None` (the points rule has no minimum age, the age rules have no points
/// threshold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleVerdict {
    /// Which rule produced this verdict.
    pub rule: RuleId,
    /// Human-readable rule name.
    pub rule_name: String,
    /// Reference to the constitutional article defining the rule.
    pub article_ref: String,
    /// Whether every requirement of the rule is met.
    pub eligible: bool,
    /// The eligibility status.
    pub status: VerdictStatus,
    /// Minimum age requirement, if the rule has one.
    pub required_age: Option<u32>,
    /// Contribution-time requirement applied, in months.
    pub required_months: u32,
    /// Points requirement, if the rule has one.
    pub required_points: Option<u32>,
    /// Current points score (age + contribution years), if the rule uses
    /// points. Fractional because contribution years rarely divide evenly.
    pub current_points: Option<Decimal>,
    /// Months still missing against `required_months` (zero when met).
    pub missing_months: u32,
    /// Years of age still missing against `required_age` (zero when met).
    pub missing_age: u32,
    /// Points still missing against `required_points` (zero when met).
    pub missing_points: Decimal,
    /// Human-readable note about how the rule applies.
    pub note: String,
}

impl RuleVerdict {
    /// Combined shortfall used by the selector to rank verdicts.
    ///
    /// Sums `missing_months` + `missing_age` + `missing_points`. The addends
    /// are in incompatible units (months, years, points); the weighting is
    /// inherited from the original engine and kept as-is, because choosing a
    /// correct relative weighting is a legal policy question outside this
    /// engine's authority.
    pub fn shortfall_score(&self) -> Decimal {
        Decimal::from(self.missing_months) + Decimal::from(self.missing_age) + self.missing_points
    }
}

/// A warning generated during evaluation.
///
/// Warnings flag conditions that do not prevent evaluation but may require
/// attention, such as implausible input amounts or dates outside the
/// statutory range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The aggregate result of evaluating all four transition rules.
///
/// Created fresh per evaluation call and never mutated afterward.
/// `all_verdicts` preserves evaluation order: points, general, toll-50,
/// toll-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityReport {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// All four verdicts in evaluation order.
    pub all_verdicts: Vec<RuleVerdict>,
    /// The subsequence of `all_verdicts` with `eligible = true`.
    pub eligible_verdicts: Vec<RuleVerdict>,
    /// The single best verdict, chosen by the selector.
    pub best_verdict: RuleVerdict,
    /// Number of eligible verdicts.
    pub eligible_count: usize,
    /// Total number of rules evaluated (always 4).
    pub total_count: usize,
    /// Advisory warnings raised during evaluation.
    pub warnings: Vec<EvaluationWarning>,
}
