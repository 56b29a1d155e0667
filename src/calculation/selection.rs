//! Best-rule selection.
//!
//! Reduces the four rule verdicts to the single best candidate: an eligible
//! verdict when one exists, otherwise the verdict closest to being met.

use crate::error::{EngineError, EngineResult};
use crate::models::{RuleVerdict, VerdictStatus};

/// Selects the best verdict from a slice of rule verdicts.
///
/// Eligible verdicts are preferred; within the chosen partition the verdict
/// with the smallest combined shortfall wins
/// ([`RuleVerdict::shortfall_score`]). Ties keep the earliest verdict in
/// evaluation order. When no verdict is eligible, the winner is returned
/// re-marked [`VerdictStatus::ClosestNotYetEligible`].
///
/// For a truly eligible verdict every shortfall is zero, so the score
/// comparison among eligible verdicts is a correctness safeguard against a
/// verdict flagged eligible with a partial condition outstanding, not the
/// primary selection path.
///
/// # Errors
///
/// Returns [`EngineError::EmptyVerdictSet`] when `verdicts` is empty. The
/// engine always evaluates exactly four rules, so this indicates a caller
/// bug.
pub fn select_best_verdict(verdicts: &[RuleVerdict]) -> EngineResult<RuleVerdict> {
    let eligible: Vec<&RuleVerdict> = verdicts.iter().filter(|v| v.eligible).collect();
    let any_eligible = !eligible.is_empty();

    let pool: Vec<&RuleVerdict> = if any_eligible {
        eligible
    } else {
        verdicts.iter().collect()
    };

    let (first, rest) = pool.split_first().ok_or(EngineError::EmptyVerdictSet)?;

    // Strict less-than keeps the earliest verdict on ties.
    let mut best = *first;
    for verdict in rest {
        if verdict.shortfall_score() < best.shortfall_score() {
            best = *verdict;
        }
    }

    let mut chosen = best.clone();
    if !any_eligible {
        chosen.status = VerdictStatus::ClosestNotYetEligible;
    }
    Ok(chosen)
}
