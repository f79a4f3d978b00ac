//! Payslip models for the Payroll Calculation Engine.
//!
//! This module contains the [`Payslip`] type and its associated structures
//! that capture every output of a monthly payroll run for one employee,
//! including statutory contributions, loan deductions, and an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EpfContribution, EtfContribution, PayPeriod, SalaryComponents, SalaryResult};

/// A loan installment to deduct from a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanDeduction {
    /// Identifier of the loan record held by the data service.
    pub loan_id: String,
    /// The installment to deduct this period.
    pub amount: Decimal,
}

/// Everything needed to compute one employee's payslip.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayslipInput;
///
/// let json = r#"{
///     "employee_id": "emp_001",
///     "pay_period": {"start_date": "2026-02-01", "end_date": "2026-02-28"},
///     "components": {"basic_salary": "50000"}
/// }"#;
/// let input: PayslipInput = serde_json::from_str(json).unwrap();
/// assert!(input.loan_deductions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayslipInput {
    /// Identifier of the employee.
    pub employee_id: String,
    /// The period the payslip covers.
    pub pay_period: PayPeriod,
    /// The salary figures for the period.
    #[serde(default)]
    pub components: SalaryComponents,
    /// Loan installments due this period.
    #[serde(default)]
    pub loan_deductions: Vec<LoanDeduction>,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered record of every rule applied while building a payslip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

/// The complete result of a payroll run for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Identifier of the employee.
    pub employee_id: String,
    /// The period the payslip covers.
    pub pay_period: PayPeriod,
    /// Salary breakdown.
    pub salary: SalaryResult,
    /// EPF shares on the basic salary.
    pub epf: EpfContribution,
    /// ETF share on the basic salary.
    pub etf: EtfContribution,
    /// Loan installments deducted.
    pub loan_deductions: Vec<LoanDeduction>,
    /// Sum of the loan installments.
    pub loan_deductions_total: Decimal,
    /// EPF employee share plus loan installments.
    pub total_deductions: Decimal,
    /// Net payable less deductions, clamped at zero.
    pub net_pay: Decimal,
    /// Net payable plus the employer's EPF and ETF shares.
    pub employer_cost: Decimal,
    /// How the figures were reached.
    pub audit_trace: AuditTrace,
}

/// Totals across a set of payslips, as shown on the payroll report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of payslips summarized.
    pub employee_count: usize,
    /// Sum of net payable salaries before deductions.
    pub total_gross: Decimal,
    /// Sum of take-home pay.
    pub total_net_pay: Decimal,
    /// Sum of EPF employee shares.
    pub total_epf_employee: Decimal,
    /// Sum of EPF employer shares.
    pub total_epf_employer: Decimal,
    /// Sum of ETF contributions.
    pub total_etf: Decimal,
    /// Sum of loan installments.
    pub total_loan_deductions: Decimal,
    /// Sum of employer costs.
    pub total_employer_cost: Decimal,
}
