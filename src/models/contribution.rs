//! Statutory contribution models.
//!
//! EPF (Employee Provident Fund) is shared between employee and employer;
//! ETF (Employer Trust Fund) is paid by the employer alone.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The statutory scheme a contribution is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContributionScheme {
    /// Employee Provident Fund.
    Epf,
    /// Employer Trust Fund.
    Etf,
}

/// Request for a single statutory contribution.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ContributionInput, ContributionScheme};
///
/// let input: ContributionInput =
///     serde_json::from_str(r#"{"basic_salary": "50000", "scheme": "EPF"}"#).unwrap();
/// assert_eq!(input.scheme, ContributionScheme::Epf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContributionInput {
    /// The basic salary the contribution is levied on.
    pub basic_salary: Decimal,
    /// Which scheme to compute.
    pub scheme: ContributionScheme,
}

/// EPF shares, each rounded to a whole currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpfContribution {
    /// The employee's share (8%).
    pub employee_contribution: Decimal,
    /// The employer's share (12%).
    pub employer_contribution: Decimal,
    /// Sum of the two rounded shares.
    pub total: Decimal,
}

/// ETF contribution, rounded to a whole currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtfContribution {
    /// The employer's share (3%).
    pub employer_contribution: Decimal,
    /// Equal to `employer_contribution`.
    pub total: Decimal,
}

/// A contribution for either scheme, tagged with the scheme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "UPPERCASE")]
pub enum ContributionResult {
    /// Employee Provident Fund shares.
    Epf(EpfContribution),
    /// Employer Trust Fund share.
    Etf(EtfContribution),
}

impl ContributionResult {
    /// Returns the total contribution regardless of scheme.
    pub fn total(&self) -> Decimal {
        match self {
            ContributionResult::Epf(epf) => epf.total,
            ContributionResult::Etf(etf) => etf.total,
        }
    }
}
