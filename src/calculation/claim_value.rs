//! Claim-value estimation.
//!
//! Computes the monetary value of a benefit claim from the overdue
//! installments plus, by convention, twelve future installments. Also
//! provides the simple-interest arrears calculation used when a granted
//! benefit was paid late.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed minimum claim value (1000.00), used when the inputs cannot
/// produce a meaningful estimate.
pub fn minimum_claim_value() -> Decimal {
    Decimal::new(100_000, 2)
}

/// The default monthly interest rate on arrears (1%).
pub fn default_arrears_rate() -> Decimal {
    Decimal::new(1, 2)
}

/// Estimates the monetary value of a claim.
///
/// `overdue_installments × monthly_value` plus twelve future installments,
/// rounded to two decimal places. When either input is zero or negative the
/// fixed minimum is returned instead.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::estimate_claim_value;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let monthly = Decimal::from_str("2500.00").unwrap();
/// assert_eq!(
///     estimate_claim_value(12, monthly),
///     Decimal::from_str("60000.00").unwrap()
/// );
///
/// // No overdue installments: fixed minimum.
/// assert_eq!(
///     estimate_claim_value(0, monthly),
///     Decimal::from_str("1000.00").unwrap()
/// );
/// ```
pub fn estimate_claim_value(overdue_installments: i64, monthly_value: Decimal) -> Decimal {
    if overdue_installments <= 0 || monthly_value <= Decimal::ZERO {
        return minimum_claim_value();
    }

    let overdue = Decimal::from(overdue_installments) * monthly_value;
    // Twelve future installments added by convention.
    let future = Decimal::from(12) * monthly_value;

    (overdue + future).round_dp(2)
}

/// The result of computing simple interest on a late payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatePaymentInterest {
    /// The principal amount owed.
    pub principal: Decimal,
    /// Days elapsed past the due date (zero when not yet due).
    pub days_late: i64,
    /// Months elapsed past the due date (days / 30), rounded to 2 dp.
    pub months_late: Decimal,
    /// The monthly interest rate applied.
    pub monthly_rate: Decimal,
    /// The interest accrued, rounded to 2 dp.
    pub interest: Decimal,
    /// Principal plus interest, rounded to 2 dp.
    pub total: Decimal,
}

/// Computes simple interest on an amount overdue since `due_date`.
///
/// Interest accrues at `monthly_rate` per 30-day month. A due date of today
/// or later accrues nothing.
pub fn late_payment_interest(
    principal: Decimal,
    due_date: NaiveDate,
    today: NaiveDate,
    monthly_rate: Decimal,
) -> LatePaymentInterest {
    let days_late = (today - due_date).num_days().max(0);

    let months_late = Decimal::from(days_late) / Decimal::from(30);
    let interest = (principal * monthly_rate * months_late).round_dp(2);

    LatePaymentInterest {
        principal,
        days_late,
        months_late: months_late.round_dp(2),
        monthly_rate,
        interest,
        total: (principal + interest).round_dp(2),
    }
}
