//! Integration tests for the Payroll Calculation Engine.
//!
//! This test suite drives the HTTP API end to end:
//! - Salary calculation
//! - EPF/ETF contributions
//! - Loan eligibility, amortization and quotes
//! - KPI classification and summaries
//! - Payslips and payroll runs
//! - Error cases
//!
//! Properties of the pure calculators are checked with proptest at the end.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{
    AVERAGE_THRESHOLD, EXCELLENT_THRESHOLD, GOOD_THRESHOLD, amortize, check_loan_eligibility,
    classify, compute_epf, compute_etf, compute_payslip, compute_salary,
};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{
    KpiBand, LoanEligibilityInput, LoanType, PayPeriod, PayslipInput, SalaryComponents,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Asserts that a decimal-as-string field equals the expected value,
/// ignoring scale.
fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected a decimal string, got {}", value));
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

fn find_loan<'a>(results: &'a Value, loan_type: &str) -> &'a Value {
    results
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["loan_type"] == loan_type)
        .unwrap_or_else(|| panic!("No eligibility result for {}", loan_type))
}

fn payslip_request(employee_id: &str, basic_salary: &str, loan_amounts: &[&str]) -> Value {
    let loan_deductions: Vec<Value> = loan_amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| json!({ "loan_id": format!("loan_{}", i + 1), "amount": amount }))
        .collect();

    json!({
        "employee_id": employee_id,
        "pay_period": { "start_date": "2026-02-01", "end_date": "2026-02-28" },
        "components": { "basic_salary": basic_salary },
        "loan_deductions": loan_deductions
    })
}

// =============================================================================
// SECTION 1: Salary
// =============================================================================

#[tokio::test]
async fn test_salary_with_overtime_and_bonus() {
    let (status, result) = post(
        create_router_for_test(),
        "/salary",
        json!({
            "basic_salary": "5000",
            "ot_hours": "10",
            "ot_rate": "50",
            "bonus_amount": "1000",
            "increment_amount": "0",
            "no_pay_days": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["ot_pay"], "500");
    assert_decimal(&result["no_pay_deduction"], "0");
    assert_decimal(&result["total_salary"], "6500");
    assert_decimal(&result["net_payable"], "6500");
}

#[tokio::test]
async fn test_salary_full_month_no_pay_clamps_net_payable() {
    // 31 days at 3000 / 30 per day deducts more than the basic salary
    let (status, result) = post(
        create_router_for_test(),
        "/salary",
        json!({ "basic_salary": "3000", "no_pay_days": 31 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["no_pay_deduction"], "3100");
    assert_decimal(&result["total_salary"], "-100");
    assert_decimal(&result["net_payable"], "0");
}

#[tokio::test]
async fn test_salary_increment_is_added() {
    let (status, result) = post(
        create_router_for_test(),
        "/salary",
        json!({ "basic_salary": "45000", "increment_amount": "2500" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["total_salary"], "47500");
}

#[tokio::test]
async fn test_salary_rejects_too_many_no_pay_days() {
    let (status, result) = post(
        create_router_for_test(),
        "/salary",
        json!({ "basic_salary": "3000", "no_pay_days": 32 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 2: Contributions
// =============================================================================

#[tokio::test]
async fn test_epf_contribution() {
    let (status, result) = post(
        create_router_for_test(),
        "/contributions",
        json!({ "basic_salary": "50000", "scheme": "EPF" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["scheme"], "EPF");
    assert_decimal(&result["employee_contribution"], "4000");
    assert_decimal(&result["employer_contribution"], "6000");
    assert_decimal(&result["total"], "10000");
}

#[tokio::test]
async fn test_etf_contribution() {
    let (status, result) = post(
        create_router_for_test(),
        "/contributions",
        json!({ "basic_salary": "50000", "scheme": "ETF" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["scheme"], "ETF");
    assert_decimal(&result["employer_contribution"], "1500");
    assert_decimal(&result["total"], "1500");
    assert!(result.get("employee_contribution").is_none());
}

#[tokio::test]
async fn test_contribution_shares_round_half_away_from_zero() {
    // 12345 * 8% = 987.6, * 12% = 1481.4
    let (status, result) = post(
        create_router_for_test(),
        "/contributions",
        json!({ "basic_salary": "12345", "scheme": "EPF" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["employee_contribution"], "988");
    assert_decimal(&result["employer_contribution"], "1481");
    assert_decimal(&result["total"], "2469");
}

#[tokio::test]
async fn test_unknown_scheme_is_rejected() {
    let (status, result) = post(
        create_router_for_test(),
        "/contributions",
        json!({ "basic_salary": "50000", "scheme": "PAYE" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 3: Loan eligibility
// =============================================================================

#[tokio::test]
async fn test_staff_member_below_home_loan_minimum() {
    let (status, results) = post(
        create_router_for_test(),
        "/loans/eligibility",
        json!({ "basic_salary": "40000", "employment_role": "staff" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(results.as_array().unwrap().len(), 5);

    let home = find_loan(&results, "home_loan");
    assert_eq!(home["eligible"], false);
    assert_decimal(&home["max_amount"], "0");
    assert!(
        home["reasons"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r == "Salary below minimum requirement")
    );

    let staff = find_loan(&results, "staff_loan");
    assert_eq!(staff["eligible"], true);
    assert_decimal(&staff["max_amount"], "120000");
    assert_eq!(staff["reasons"], json!(["Eligible"]));

    let vehicle = find_loan(&results, "vehicle_loan");
    assert_decimal(&vehicle["max_amount"], "960000");
}

#[tokio::test]
async fn test_probationer_is_ineligible_for_every_loan() {
    let (status, results) = post(
        create_router_for_test(),
        "/loans/eligibility",
        json!({ "basic_salary": "100000", "employment_role": "probation" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    for result in results.as_array().unwrap() {
        assert_eq!(result["eligible"], false, "{} should be ineligible", result["loan_type"]);
        assert!(
            result["reasons"]
                .as_array()
                .unwrap()
                .iter()
                .any(|r| r == "Employee on probation")
        );
    }
}

#[tokio::test]
async fn test_eligibility_follows_catalog_order() {
    let (_, results) = post(
        create_router_for_test(),
        "/loans/eligibility",
        json!({ "basic_salary": "60000", "employment_role": "manager" }),
    )
    .await;

    let order: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["loan_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        order,
        vec!["staff_loan", "home_loan", "emergency_loan", "vehicle_loan", "other"]
    );
}

// =============================================================================
// SECTION 4: Amortization and quotes
// =============================================================================

#[tokio::test]
async fn test_amortize_flat_interest() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/amortize",
        json!({ "amount": "120000", "interest_rate_percent": "5", "duration_months": 12 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["monthly_payment"], "10500");
    assert_decimal(&result["total_repayable"], "126000");
    assert_decimal(&result["total_interest"], "6000");
}

#[tokio::test]
async fn test_amortize_negative_duration_is_rejected() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/amortize",
        json!({ "amount": "120000", "interest_rate_percent": "5", "duration_months": -3 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DURATION");
}

#[tokio::test]
async fn test_quote_interest_free_emergency_loan() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/quote",
        json!({
            "applicant": { "basic_salary": "40000", "employment_role": "staff" },
            "loan_type": "emergency_loan",
            "amount": "20000",
            "duration_months": 4
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["max_amount"], "80000");
    assert_decimal(&result["repayment"]["monthly_payment"], "5000");
    assert_decimal(&result["repayment"]["total_interest"], "0");
}

#[tokio::test]
async fn test_quote_over_cap_and_duration_lists_both_reasons() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/quote",
        json!({
            "applicant": { "basic_salary": "40000", "employment_role": "staff" },
            "loan_type": "staff_loan",
            "amount": "200000",
            "duration_months": 36
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "LOAN_NOT_AVAILABLE");
    let details = result["details"].as_str().unwrap();
    assert!(details.contains("exceeds maximum 120000"), "{}", details);
    assert!(details.contains("36 months"), "{}", details);
}

#[tokio::test]
async fn test_quote_for_ineligible_applicant() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/quote",
        json!({
            "applicant": { "basic_salary": "40000", "employment_role": "staff" },
            "loan_type": "home_loan",
            "amount": "100000",
            "duration_months": 120
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "LOAN_NOT_AVAILABLE");
    assert!(
        result["details"]
            .as_str()
            .unwrap()
            .contains("Salary below minimum requirement")
    );
}

#[tokio::test]
async fn test_quote_unknown_loan_type_is_rejected() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/quote",
        json!({
            "applicant": { "basic_salary": "40000", "employment_role": "staff" },
            "loan_type": "payday_loan",
            "amount": "1000",
            "duration_months": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 5: KPI
// =============================================================================

#[tokio::test]
async fn test_kpi_band_boundaries() {
    let cases = [
        ("90", "excellent", "green"),
        ("89.999", "good", "blue"),
        ("80", "good", "blue"),
        ("70", "average", "orange"),
        ("69.99", "below_average", "red"),
        ("0", "below_average", "red"),
        ("100", "excellent", "green"),
    ];

    for (value, band, color) in cases {
        let (status, result) = post(
            create_router_for_test(),
            "/kpi/classify",
            json!({ "kpi_value": value }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["band"], band, "kpi {}", value);
        assert_eq!(result["color"], color, "kpi {}", value);
    }
}

#[tokio::test]
async fn test_kpi_out_of_range_is_rejected() {
    let (status, result) = post(
        create_router_for_test(),
        "/kpi/classify",
        json!({ "kpi_value": "100.5" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "KPI_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_kpi_summary_counts_each_band() {
    let (status, result) = post(
        create_router_for_test(),
        "/kpi/summary",
        json!({ "kpi_values": ["95", "85", "75", "40"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["count"], 4);
    assert_eq!(result["excellent"], 1);
    assert_eq!(result["good"], 1);
    assert_eq!(result["average_band"], 1);
    assert_eq!(result["below_average"], 1);
    assert_decimal(&result["average"], "73.75");
}

// =============================================================================
// SECTION 6: Payslips and payroll runs
// =============================================================================

#[tokio::test]
async fn test_payslip_with_loan_installment() {
    let (status, result) = post(
        create_router_for_test(),
        "/payslip",
        payslip_request("emp_001", "50000", &["2500"]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(result["employee_id"], "emp_001");

    assert_decimal(&result["epf"]["employee_contribution"], "4000");
    assert_decimal(&result["etf"]["employer_contribution"], "1500");
    assert_decimal(&result["loan_deductions_total"], "2500");
    assert_decimal(&result["total_deductions"], "6500");
    assert_decimal(&result["net_pay"], "43500");
    assert_decimal(&result["employer_cost"], "57500");

    let rule_ids: Vec<&str> = result["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec!["salary", "epf_contribution", "etf_contribution", "loan_deductions", "net_pay"]
    );
}

#[tokio::test]
async fn test_payslip_net_pay_never_negative() {
    let (status, result) = post(
        create_router_for_test(),
        "/payslip",
        payslip_request("emp_002", "20000", &["30000"]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["net_pay"], "0");
}

#[tokio::test]
async fn test_payslip_inverted_period_is_rejected() {
    let mut request = payslip_request("emp_003", "50000", &[]);
    request["pay_period"] = json!({ "start_date": "2026-02-28", "end_date": "2026-02-01" });

    let (status, result) = post(create_router_for_test(), "/payslip", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_payslip_missing_employee_id() {
    let mut request = payslip_request("emp_004", "50000", &[]);
    request.as_object_mut().unwrap().remove("employee_id");

    let (status, result) = post(create_router_for_test(), "/payslip", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_payroll_summary_totals() {
    let (status, result) = post(
        create_router_for_test(),
        "/payroll/summary",
        json!({
            "payslips": [
                payslip_request("emp_001", "50000", &["2500"]),
                payslip_request("emp_002", "30000", &[])
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["payslips"].as_array().unwrap().len(), 2);

    let summary = &result["summary"];
    assert_eq!(summary["employee_count"], 2);
    assert_decimal(&summary["total_gross"], "80000");
    assert_decimal(&summary["total_epf_employee"], "6400");
    assert_decimal(&summary["total_epf_employer"], "9600");
    assert_decimal(&summary["total_etf"], "2400");
    assert_decimal(&summary["total_loan_deductions"], "2500");
    // 43500 + 27600
    assert_decimal(&summary["total_net_pay"], "71100");
    // 57500 + 34500
    assert_decimal(&summary["total_employer_cost"], "92000");
}

#[tokio::test]
async fn test_payroll_summary_rejects_run_with_invalid_payslip() {
    let (status, result) = post(
        create_router_for_test(),
        "/payroll/summary",
        json!({
            "payslips": [
                payslip_request("emp_001", "50000", &[]),
                payslip_request("emp_002", "30000", &["-10"])
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 7: Error handling
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contributions")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"basic_salary\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/kpi/classify")
                .body(Body::from(json!({ "kpi_value": "50" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_oversized_overtime_is_rejected() {
    let (status, result) = post(
        create_router_for_test(),
        "/salary",
        json!({
            "basic_salary": "5000",
            "ot_hours": "100000000000000000000",
            "ot_rate": "100000000000000000000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_loan_amount_is_rejected() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/amortize",
        json!({
            "amount": Decimal::MAX.to_string(),
            "interest_rate_percent": "5",
            "duration_months": 12
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_installments_are_rejected() {
    let max = Decimal::MAX.to_string();
    let (status, result) = post(
        create_router_for_test(),
        "/payslip",
        payslip_request("emp_005", "50000", &[max.as_str(), max.as_str()]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_applicant_salary_is_rejected() {
    let (status, result) = post(
        create_router_for_test(),
        "/loans/eligibility",
        json!({ "basic_salary": Decimal::MAX.to_string(), "employment_role": "staff" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_capitalized_probation_role_is_not_on_probation() {
    let (status, results) = post(
        create_router_for_test(),
        "/loans/eligibility",
        json!({ "basic_salary": "100000", "employment_role": "Probation" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let staff = find_loan(&results, "staff_loan");
    assert_eq!(staff["eligible"], true);
    assert_decimal(&staff["max_amount"], "300000");
}

#[tokio::test]
async fn test_negative_basic_salary_for_contribution() {
    let (status, result) = post(
        create_router_for_test(),
        "/contributions",
        json!({ "basic_salary": "-100", "scheme": "EPF" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 8: Calculator properties
// =============================================================================

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000, 0u32..=2).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn kpi_value() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000).prop_map(|mantissa| Decimal::new(mantissa, 3))
}

fn components() -> impl Strategy<Value = SalaryComponents> {
    (money(), 0i64..200, money(), money(), money(), 0u32..=31).prop_map(
        |(basic_salary, ot_hours, ot_rate, bonus_amount, increment_amount, no_pay_days)| {
            SalaryComponents {
                basic_salary,
                ot_hours: Decimal::from(ot_hours),
                ot_rate,
                bonus_amount,
                increment_amount,
                no_pay_days,
            }
        },
    )
}

proptest! {
    /// EPF total is the sum of its two rounded shares.
    #[test]
    fn epf_total_is_sum_of_shares(basic in money()) {
        let epf = compute_epf(basic);
        prop_assert_eq!(epf.total, epf.employee_contribution + epf.employer_contribution);
        prop_assert!(epf.employee_contribution >= Decimal::ZERO);
    }

    /// Net payable is never negative and equals the clamped total.
    #[test]
    fn net_payable_is_clamped_total(input in components()) {
        let result = compute_salary(&input);
        prop_assert!(result.net_payable >= Decimal::ZERO);
        prop_assert_eq!(result.net_payable, result.total_salary.max(Decimal::ZERO));
    }

    /// Calculators return identical results for identical input.
    #[test]
    fn calculators_are_idempotent(input in components(), kpi in kpi_value()) {
        prop_assert_eq!(compute_salary(&input), compute_salary(&input));
        prop_assert_eq!(compute_etf(input.basic_salary), compute_etf(input.basic_salary));

        let payslip_input = PayslipInput {
            employee_id: "emp_prop".to_string(),
            pay_period: PayPeriod {
                start_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                end_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            },
            components: input,
            loan_deductions: vec![],
        };
        let first = serde_json::to_value(compute_payslip(&payslip_input).unwrap()).unwrap();
        let second = serde_json::to_value(compute_payslip(&payslip_input).unwrap()).unwrap();
        prop_assert_eq!(first, second);

        prop_assert_eq!(classify(kpi).unwrap(), classify(kpi).unwrap());
    }

    /// Every value in [0, 100] lands in the band its thresholds select.
    #[test]
    fn kpi_band_matches_thresholds(kpi in kpi_value()) {
        let expected = if kpi >= EXCELLENT_THRESHOLD {
            KpiBand::Excellent
        } else if kpi >= GOOD_THRESHOLD {
            KpiBand::Good
        } else if kpi >= AVERAGE_THRESHOLD {
            KpiBand::Average
        } else {
            KpiBand::BelowAverage
        };
        prop_assert_eq!(classify(kpi).unwrap().band, expected);
    }

    /// Flat interest never makes the repayable total smaller than the principal.
    #[test]
    fn amortized_interest_is_non_negative(
        amount in 1i64..10_000_000,
        rate in 0i64..=2_000,
        months in 1i64..=360,
    ) {
        let result = amortize(Decimal::from(amount), Decimal::new(rate, 2), months).unwrap();
        prop_assert!(result.total_interest >= Decimal::ZERO);
        prop_assert_eq!(result.total_repayable - Decimal::from(amount), result.total_interest);
    }

    /// Eligible applicants are capped at their salary multiple; ineligible ones get nothing.
    #[test]
    fn eligibility_cap_is_consistent(basic in money(), probation in any::<bool>()) {
        let applicant = LoanEligibilityInput {
            basic_salary: basic,
            employment_role: if probation { "probation" } else { "staff" }.to_string(),
        };
        let result = check_loan_eligibility(&applicant, LoanType::StaffLoan);
        prop_assert_eq!(result.eligible, !probation);
        if result.eligible {
            prop_assert_eq!(result.max_amount, basic * Decimal::from(3));
        } else {
            prop_assert_eq!(result.max_amount, Decimal::ZERO);
        }
    }
}
