//! Request types for the Payroll Calculation Engine API.
//!
//! Most endpoints accept the model types directly; the wrappers here cover
//! requests that combine several values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LoanEligibilityInput, LoanType, PayslipInput};

/// Request body for `POST /kpi/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KpiRequest {
    /// The score to classify.
    pub kpi_value: Decimal,
}

/// Request body for `POST /kpi/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KpiSummaryRequest {
    /// The scores to summarize.
    pub kpi_values: Vec<Decimal>,
}

/// Request body for `POST /loans/quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanQuoteRequest {
    /// The employee applying.
    pub applicant: LoanEligibilityInput,
    /// The loan product requested.
    pub loan_type: LoanType,
    /// The principal requested.
    pub amount: Decimal,
    /// Number of monthly installments requested.
    pub duration_months: u32,
}

/// Request body for `POST /payroll/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayrollRunRequest {
    /// One payslip input per employee.
    pub payslips: Vec<PayslipInput>,
}
