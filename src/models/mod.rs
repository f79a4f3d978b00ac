//! Core data models for the Payroll Calculation Engine.
//!
//! Every entity the engine reads or produces is an explicit typed value
//! record. None of them is owned by the engine; calculators only transform
//! copies.

mod contribution;
mod kpi;
mod loan;
mod pay_period;
mod payslip;
mod salary;

pub use contribution::{
    ContributionInput, ContributionResult, ContributionScheme, EpfContribution, EtfContribution,
};
pub use kpi::{KpiBand, KpiClassification, KpiSummary};
pub use loan::{
    LoanAmortizationInput, LoanAmortizationResult, LoanCatalog, LoanCatalogEntry,
    LoanEligibilityInput, LoanEligibilityResult, LoanQuote, LoanType,
};
pub use pay_period::PayPeriod;
pub use payslip::{
    AuditStep, AuditTrace, LoanDeduction, PayrollSummary, Payslip, PayslipInput,
};
pub use salary::{MAX_NO_PAY_DAYS, SalaryComponents, SalaryResult};
