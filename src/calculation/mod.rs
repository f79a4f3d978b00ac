//! Calculation logic for the Payroll Calculation Engine.
//!
//! Every function here is pure: inputs arrive as explicit arguments,
//! outputs are returned values, and nothing performs I/O or keeps state.
//! The module covers salary computation, EPF/ETF statutory contributions,
//! loan eligibility and flat-interest repayment, KPI banding, and payslip
//! assembly with payroll aggregation.

mod contribution;
mod kpi;
mod loan_eligibility;
mod loan_repayment;
mod payslip;
mod rounding;
mod salary;

pub use contribution::{
    EPF_EMPLOYEE_RATE, EPF_EMPLOYER_RATE, ETF_EMPLOYER_RATE, compute_contribution, compute_epf,
    compute_etf,
};
pub use kpi::{AVERAGE_THRESHOLD, EXCELLENT_THRESHOLD, GOOD_THRESHOLD, classify, summarize_kpis};
pub use loan_eligibility::{
    HOME_LOAN_MINIMUM_SALARY, REASON_ELIGIBLE, REASON_ON_PROBATION, REASON_SALARY_BELOW_MINIMUM,
    check_eligibility, check_loan_eligibility, salary_multiple,
};
pub use loan_repayment::{amortize, quote_loan};
pub use payslip::{compute_payslip, summarize_payroll};
pub use rounding::{round_currency, round_two_places};
pub use salary::{NO_PAY_DAY_DIVISOR, compute_salary};
