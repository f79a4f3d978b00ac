//! EPF and ETF statutory contributions.
//!
//! Each share is computed on the basic salary and rounded to a whole
//! currency unit on its own; totals are sums of rounded shares.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::models::{
    ContributionInput, ContributionResult, ContributionScheme, EpfContribution, EtfContribution,
};

/// Employee share of EPF (8%).
pub const EPF_EMPLOYEE_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Employer share of EPF (12%).
pub const EPF_EMPLOYER_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Employer ETF contribution (3%).
pub const ETF_EMPLOYER_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Computes the EPF shares for a basic salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_epf;
/// use rust_decimal::Decimal;
///
/// let epf = compute_epf(Decimal::from(50000));
/// assert_eq!(epf.employee_contribution, Decimal::from(4000));
/// assert_eq!(epf.employer_contribution, Decimal::from(6000));
/// assert_eq!(epf.total, Decimal::from(10000));
/// ```
pub fn compute_epf(basic_salary: Decimal) -> EpfContribution {
    let employee_contribution = round_currency(basic_salary * EPF_EMPLOYEE_RATE);
    let employer_contribution = round_currency(basic_salary * EPF_EMPLOYER_RATE);

    EpfContribution {
        employee_contribution,
        employer_contribution,
        total: employee_contribution + employer_contribution,
    }
}

/// Computes the ETF contribution for a basic salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_etf;
/// use rust_decimal::Decimal;
///
/// let etf = compute_etf(Decimal::from(50000));
/// assert_eq!(etf.employer_contribution, Decimal::from(1500));
/// assert_eq!(etf.total, Decimal::from(1500));
/// ```
pub fn compute_etf(basic_salary: Decimal) -> EtfContribution {
    let employer_contribution = round_currency(basic_salary * ETF_EMPLOYER_RATE);

    EtfContribution {
        employer_contribution,
        total: employer_contribution,
    }
}

/// Computes the contribution for whichever scheme the input names.
pub fn compute_contribution(input: &ContributionInput) -> ContributionResult {
    match input.scheme {
        ContributionScheme::Epf => ContributionResult::Epf(compute_epf(input.basic_salary)),
        ContributionScheme::Etf => ContributionResult::Etf(compute_etf(input.basic_salary)),
    }
}
