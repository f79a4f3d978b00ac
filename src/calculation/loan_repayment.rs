//! Flat-interest loan repayment and loan quotes.
//!
//! Interest is charged once on the principal and spread evenly over the
//! installments. This is not a reducing-balance amortization schedule.

use rust_decimal::Decimal;

use super::loan_eligibility::check_loan_eligibility;
use super::rounding::round_currency;
use crate::error::{EngineError, EngineResult, ensure_amount};
use crate::models::{LoanAmortizationResult, LoanCatalogEntry, LoanEligibilityInput, LoanQuote};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Computes the monthly installment for a flat-interest loan.
///
/// `monthly_payment = round(amount * (1 + interest_rate_percent / 100) / duration_months)`
///
/// # Errors
///
/// - [`EngineError::InvalidDuration`] if `duration_months` is zero or negative
/// - [`EngineError::InvalidInput`] if `amount` is not positive or the rate is negative
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::amortize;
/// use rust_decimal::Decimal;
///
/// let result = amortize(Decimal::from(120000), Decimal::from(5), 12).unwrap();
/// assert_eq!(result.monthly_payment, Decimal::from(10500));
/// assert_eq!(result.total_repayable, Decimal::from(126000));
/// assert_eq!(result.total_interest, Decimal::from(6000));
/// ```
pub fn amortize(
    amount: Decimal,
    interest_rate_percent: Decimal,
    duration_months: i64,
) -> EngineResult<LoanAmortizationResult> {
    if duration_months <= 0 {
        return Err(EngineError::InvalidDuration {
            months: duration_months,
        });
    }
    if amount <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "amount",
            format!("must be greater than zero (got {})", amount),
        ));
    }
    ensure_amount("amount", amount)?;
    ensure_amount("interest_rate_percent", interest_rate_percent)?;

    let repayable = amount * (Decimal::ONE + interest_rate_percent / ONE_HUNDRED);
    let monthly_payment = round_currency(repayable / Decimal::from(duration_months));
    let total_repayable = round_currency(repayable);

    Ok(LoanAmortizationResult {
        monthly_payment,
        total_repayable,
        total_interest: total_repayable - amount,
    })
}

/// Prices a loan request against a catalog entry.
///
/// The request is accepted only if the employee is eligible for the entry's
/// loan type, the amount does not exceed their cap, and the duration does
/// not exceed the entry's maximum. All refusal reasons are collected into a
/// single [`EngineError::LoanNotAvailable`].
pub fn quote_loan(
    applicant: &LoanEligibilityInput,
    entry: &LoanCatalogEntry,
    amount: Decimal,
    duration_months: u32,
) -> EngineResult<LoanQuote> {
    let repayment = amortize(
        amount,
        entry.interest_rate_percent,
        i64::from(duration_months),
    )?;

    let eligibility = check_loan_eligibility(applicant, entry.loan_type);
    if !eligibility.eligible {
        return Err(EngineError::LoanNotAvailable {
            loan_type: entry.loan_type,
            reasons: eligibility.reasons,
        });
    }

    let mut reasons = Vec::new();
    if amount > eligibility.max_amount {
        reasons.push(format!(
            "Requested amount {} exceeds maximum {}",
            amount.normalize(),
            eligibility.max_amount.normalize()
        ));
    }
    if duration_months > entry.max_duration_months {
        reasons.push(format!(
            "Duration of {} months exceeds maximum of {} months",
            duration_months, entry.max_duration_months
        ));
    }
    if !reasons.is_empty() {
        return Err(EngineError::LoanNotAvailable {
            loan_type: entry.loan_type,
            reasons,
        });
    }

    Ok(LoanQuote {
        loan_type: entry.loan_type,
        amount,
        interest_rate_percent: entry.interest_rate_percent,
        duration_months,
        max_amount: eligibility.max_amount,
        repayment,
    })
}
