//! Benefit waiting-period ("carência") checks.
//!
//! Each benefit type demands a minimum number of monthly contributions
//! before it becomes claimable. Death pension and the social-assistance
//! benefit have no waiting period at all.

use serde::{Deserialize, Serialize};

/// The benefit types with a statutory waiting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitType {
    /// Retirement on permanent disability.
    DisabilityRetirement,
    /// Retirement by age.
    AgeRetirement,
    /// Retirement by contribution time.
    ContributionTimeRetirement,
    /// Temporary sickness allowance.
    SicknessAllowance,
    /// Maternity pay.
    MaternityPay,
    /// Pension paid to dependents on death of the insured.
    DeathPension,
    /// Social-assistance benefit (BPC/LOAS).
    SocialAssistance,
}

impl BenefitType {
    /// The minimum number of monthly contributions required before this
    /// benefit becomes claimable.
    pub fn required_contributions(self) -> u32 {
        match self {
            BenefitType::DisabilityRetirement => 12,
            BenefitType::AgeRetirement => 180,
            BenefitType::ContributionTimeRetirement => 180,
            BenefitType::SicknessAllowance => 12,
            BenefitType::MaternityPay => 10,
            BenefitType::DeathPension => 0,
            BenefitType::SocialAssistance => 0,
        }
    }
}

/// The result of a waiting-period check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingPeriodResult {
    /// The benefit checked.
    pub benefit: BenefitType,
    /// Contributions required for this benefit.
    pub required_contributions: u32,
    /// Contributions accrued so far.
    pub current_contributions: u32,
    /// Whether the waiting period is satisfied.
    pub met: bool,
    /// Contributions still missing (zero when met).
    pub missing_contributions: u32,
}

/// Checks whether the waiting period for a benefit is satisfied.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::{check_waiting_period, BenefitType};
///
/// let result = check_waiting_period(BenefitType::AgeRetirement, 150);
/// assert!(!result.met);
/// assert_eq!(result.missing_contributions, 30);
/// ```
pub fn check_waiting_period(benefit: BenefitType, contributions: u32) -> WaitingPeriodResult {
    let required = benefit.required_contributions();

    WaitingPeriodResult {
        benefit,
        required_contributions: required,
        current_contributions: contributions,
        met: contributions >= required,
        missing_contributions: required.saturating_sub(contributions),
    }
}
