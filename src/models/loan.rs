//! Loan models: catalog, eligibility, and repayment.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kinds of staff loan the company offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// General purpose staff loan.
    StaffLoan,
    /// Housing loan with a minimum salary requirement.
    HomeLoan,
    /// Short-term emergency loan.
    EmergencyLoan,
    /// Vehicle purchase loan.
    VehicleLoan,
    /// Any other loan product.
    Other,
}

impl LoanType {
    /// Returns the snake_case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::StaffLoan => "staff_loan",
            LoanType::HomeLoan => "home_loan",
            LoanType::EmergencyLoan => "emergency_loan",
            LoanType::VehicleLoan => "vehicle_loan",
            LoanType::Other => "other",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loan product offered by the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanCatalogEntry {
    /// The loan type, which decides the salary cap and eligibility rules.
    pub loan_type: LoanType,
    /// Display name of the product.
    pub name: String,
    /// Flat annual-equivalent interest applied over the whole loan, in percent.
    pub interest_rate_percent: Decimal,
    /// The longest repayment period offered.
    pub max_duration_months: u32,
}

/// The loan products offered by the company, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanCatalog {
    /// Catalog entries.
    pub loans: Vec<LoanCatalogEntry>,
}

impl LoanCatalog {
    /// Finds the catalog entry for a loan type.
    pub fn get(&self, loan_type: LoanType) -> Option<&LoanCatalogEntry> {
        self.loans.iter().find(|entry| entry.loan_type == loan_type)
    }

    /// Like [`LoanCatalog::get`], failing with
    /// [`EngineError::LoanTypeNotFound`] when the type is not offered.
    pub fn entry(&self, loan_type: LoanType) -> EngineResult<&LoanCatalogEntry> {
        self.get(loan_type)
            .ok_or(EngineError::LoanTypeNotFound { loan_type })
    }

    /// Returns true when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

/// The employee facts that loan eligibility depends on.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LoanEligibilityInput;
///
/// let input: LoanEligibilityInput =
///     serde_json::from_str(r#"{"basic_salary": "40000", "employment_role": "staff"}"#).unwrap();
/// assert!(!input.is_on_probation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanEligibilityInput {
    /// The employee's basic monthly salary.
    pub basic_salary: Decimal,
    /// The employee's role, e.g. "staff", "manager" or "probation".
    pub employment_role: String,
}

impl LoanEligibilityInput {
    /// Returns true if the employee is still on probation.
    ///
    /// Only the exact role `"probation"` matches; callers normalize the role
    /// before it reaches the engine.
    pub fn is_on_probation(&self) -> bool {
        self.employment_role == "probation"
    }
}

/// The eligibility outcome for one loan type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanEligibilityResult {
    /// The loan type this result is for.
    pub loan_type: LoanType,
    /// Whether the employee may apply.
    pub eligible: bool,
    /// The largest amount the employee may borrow; zero when ineligible.
    pub max_amount: Decimal,
    /// Why the employee is or is not eligible. Never empty.
    pub reasons: Vec<String>,
}

/// Request for a flat-interest repayment calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanAmortizationInput {
    /// The principal borrowed.
    pub amount: Decimal,
    /// Flat interest over the whole loan, in percent.
    pub interest_rate_percent: Decimal,
    /// Number of monthly installments.
    pub duration_months: i64,
}

/// Flat-interest repayment figures, rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanAmortizationResult {
    /// The installment deducted each month.
    pub monthly_payment: Decimal,
    /// Principal plus interest.
    pub total_repayable: Decimal,
    /// `total_repayable - amount`.
    pub total_interest: Decimal,
}

/// An accepted loan request priced against a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuote {
    /// The loan type requested.
    pub loan_type: LoanType,
    /// The principal requested.
    pub amount: Decimal,
    /// The interest rate taken from the catalog.
    pub interest_rate_percent: Decimal,
    /// Number of monthly installments.
    pub duration_months: u32,
    /// The cap that applied to this employee.
    pub max_amount: Decimal,
    /// Repayment figures.
    pub repayment: LoanAmortizationResult,
}
