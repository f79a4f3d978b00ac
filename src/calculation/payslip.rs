//! Payslip assembly and payroll aggregation.
//!
//! A payslip combines the salary calculator with the statutory contribution
//! calculators and the employee's loan installments, recording an audit
//! step for every rule applied.

use rust_decimal::Decimal;

use super::contribution::{compute_epf, compute_etf};
use super::salary::compute_salary;
use crate::error::{EngineResult, ensure_amount, overflow};
use crate::models::{AuditStep, AuditTrace, PayrollSummary, Payslip, PayslipInput};

/// Computes a complete payslip for one employee and period.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] if the pay period is
/// inverted, a salary component or loan installment is negative or above
/// [`crate::error::MAX_AMOUNT`], or the installments sum past `Decimal` range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payslip;
/// use payroll_engine::models::{PayPeriod, PayslipInput, SalaryComponents};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let payslip = compute_payslip(&PayslipInput {
///     employee_id: "emp_001".to_string(),
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
///     },
///     components: SalaryComponents {
///         basic_salary: Decimal::from(50000),
///         ..Default::default()
///     },
///     loan_deductions: vec![],
/// })
/// .unwrap();
///
/// // 50000 less the 8% EPF employee share
/// assert_eq!(payslip.net_pay, Decimal::from(46000));
/// // 50000 plus 12% EPF and 3% ETF employer shares
/// assert_eq!(payslip.employer_cost, Decimal::from(57500));
/// ```
pub fn compute_payslip(input: &PayslipInput) -> EngineResult<Payslip> {
    input.pay_period.validate()?;
    input.components.validate()?;
    for deduction in &input.loan_deductions {
        ensure_amount("loan_deductions.amount", deduction.amount)?;
    }

    let mut steps: Vec<AuditStep> = Vec::with_capacity(5);
    let basic_salary = input.components.basic_salary;

    let salary = compute_salary(&input.components);
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "salary".to_string(),
        rule_name: "Salary Calculation".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "ot_hours": input.components.ot_hours.normalize().to_string(),
            "ot_rate": input.components.ot_rate.normalize().to_string(),
            "bonus_amount": input.components.bonus_amount.normalize().to_string(),
            "increment_amount": input.components.increment_amount.normalize().to_string(),
            "no_pay_days": input.components.no_pay_days,
            "period_days": input.pay_period.days()
        }),
        output: serde_json::json!({
            "ot_pay": salary.ot_pay.normalize().to_string(),
            "no_pay_deduction": salary.no_pay_deduction.normalize().to_string(),
            "total_salary": salary.total_salary.normalize().to_string(),
            "net_payable": salary.net_payable.normalize().to_string()
        }),
        reasoning: if salary.total_salary < Decimal::ZERO {
            format!(
                "Total salary {} is negative; net payable clamped to 0",
                salary.total_salary.normalize()
            )
        } else {
            format!(
                "{} basic + {} overtime + {} bonus + {} increment - {} no-pay = {}",
                basic_salary.normalize(),
                salary.ot_pay.normalize(),
                salary.bonus_amount.normalize(),
                salary.increment_amount.normalize(),
                salary.no_pay_deduction.round_dp(2).normalize(),
                salary.total_salary.round_dp(2).normalize()
            )
        },
    });

    let epf = compute_epf(basic_salary);
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "epf_contribution".to_string(),
        rule_name: "EPF Contribution".to_string(),
        input: serde_json::json!({ "basic_salary": basic_salary.normalize().to_string() }),
        output: serde_json::json!({
            "employee_contribution": epf.employee_contribution.to_string(),
            "employer_contribution": epf.employer_contribution.to_string(),
            "total": epf.total.to_string()
        }),
        reasoning: format!(
            "8% employee share {} + 12% employer share {} = {}",
            epf.employee_contribution, epf.employer_contribution, epf.total
        ),
    });

    let etf = compute_etf(basic_salary);
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "etf_contribution".to_string(),
        rule_name: "ETF Contribution".to_string(),
        input: serde_json::json!({ "basic_salary": basic_salary.normalize().to_string() }),
        output: serde_json::json!({ "employer_contribution": etf.employer_contribution.to_string() }),
        reasoning: format!("3% employer share = {}", etf.employer_contribution),
    });

    let loan_deductions_total = input
        .loan_deductions
        .iter()
        .try_fold(Decimal::ZERO, |total, d| total.checked_add(d.amount))
        .ok_or_else(|| overflow("loan_deductions"))?;
    steps.push(AuditStep {
        step_number: 4,
        rule_id: "loan_deductions".to_string(),
        rule_name: "Loan Installments".to_string(),
        input: serde_json::json!({
            "loans": input
                .loan_deductions
                .iter()
                .map(|d| serde_json::json!({
                    "loan_id": d.loan_id,
                    "amount": d.amount.normalize().to_string()
                }))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({ "total": loan_deductions_total.normalize().to_string() }),
        reasoning: format!(
            "{} installment(s) totalling {}",
            input.loan_deductions.len(),
            loan_deductions_total.normalize()
        ),
    });

    let total_deductions = epf.employee_contribution + loan_deductions_total;
    let net_pay = (salary.net_payable - total_deductions).max(Decimal::ZERO);
    let employer_cost = salary.net_payable + epf.employer_contribution + etf.employer_contribution;
    steps.push(AuditStep {
        step_number: 5,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "net_payable": salary.net_payable.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.normalize().to_string(),
            "employer_cost": employer_cost.normalize().to_string()
        }),
        reasoning: if salary.net_payable < total_deductions {
            "Deductions exceed net payable; net pay clamped to 0".to_string()
        } else {
            format!(
                "{} - {} = {}",
                salary.net_payable.round_dp(2).normalize(),
                total_deductions.normalize(),
                net_pay.round_dp(2).normalize()
            )
        },
    });

    Ok(Payslip {
        employee_id: input.employee_id.clone(),
        pay_period: input.pay_period.clone(),
        salary,
        epf,
        etf,
        loan_deductions: input.loan_deductions.clone(),
        loan_deductions_total,
        total_deductions,
        net_pay,
        employer_cost,
        audit_trace: AuditTrace { steps },
    })
}

/// Totals a set of payslips for the payroll report.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] if a total grows past
/// `Decimal` range.
pub fn summarize_payroll(payslips: &[Payslip]) -> EngineResult<PayrollSummary> {
    fn add(total: Decimal, value: Decimal, field: &str) -> EngineResult<Decimal> {
        total.checked_add(value).ok_or_else(|| overflow(field))
    }

    payslips
        .iter()
        .try_fold(PayrollSummary::default(), |summary, payslip| {
            Ok(PayrollSummary {
                employee_count: summary.employee_count + 1,
                total_gross: add(summary.total_gross, payslip.salary.net_payable, "total_gross")?,
                total_net_pay: add(summary.total_net_pay, payslip.net_pay, "total_net_pay")?,
                total_epf_employee: add(
                    summary.total_epf_employee,
                    payslip.epf.employee_contribution,
                    "total_epf_employee",
                )?,
                total_epf_employer: add(
                    summary.total_epf_employer,
                    payslip.epf.employer_contribution,
                    "total_epf_employer",
                )?,
                total_etf: add(summary.total_etf, payslip.etf.employer_contribution, "total_etf")?,
                total_loan_deductions: add(
                    summary.total_loan_deductions,
                    payslip.loan_deductions_total,
                    "total_loan_deductions",
                )?,
                total_employer_cost: add(
                    summary.total_employer_cost,
                    payslip.employer_cost,
                    "total_employer_cost",
                )?,
            })
        })
}
