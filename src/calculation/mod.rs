//! Calculation logic for the Benefit Eligibility Rule Engine.
//!
//! This module contains the four transition-rule evaluators (points rule,
//! general rule, 50% toll, 100% toll), the selector that reduces their
//! verdicts to a single best candidate, and the supporting calculators:
//! time-unit normalization, hazardous-exposure time conversion, grace-period
//! evaluation, claim-value estimation and benefit waiting-period checks.

mod claim_value;
mod general_rule;
mod grace_period;
mod hazard;
mod points_rule;
mod selection;
mod time_units;
mod toll100_rule;
mod toll50_rule;
mod transition;
mod waiting_period;

pub use claim_value::{
    LatePaymentInterest, default_arrears_rate, estimate_claim_value, late_payment_interest,
    minimum_claim_value,
};
pub use general_rule::evaluate_general_rule;
pub use grace_period::{GracePeriodResult, evaluate_grace_period};
pub use hazard::{
    HazardConversionResult, HazardValidation, convert_hazard_time, female_conversion_multiplier,
    male_conversion_multiplier, months_between,
};
pub use points_rule::evaluate_points_rule;
pub use selection::select_best_verdict;
pub use time_units::{
    AMBIGUOUS_MONTHS_THRESHOLD, MonthsBreakdown, TimeUnit, format_months, to_months,
};
pub use toll100_rule::evaluate_toll100_rule;
pub use toll50_rule::evaluate_toll50_rule;
pub use transition::{ENGINE_VERSION, evaluate_transition_rules};
pub use waiting_period::{BenefitType, WaitingPeriodResult, check_waiting_period};
