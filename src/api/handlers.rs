//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! Handlers validate input at the boundary, call the pure calculators, and
//! log each request under a fresh correlation ID. Nothing is persisted.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    amortize, check_eligibility, classify, compute_contribution, compute_payslip, compute_salary,
    quote_loan, summarize_kpis, summarize_payroll,
};
use crate::config::ConfigLoader;
use crate::error::{EngineResult, ensure_amount};
use crate::models::{
    ContributionInput, LoanAmortizationInput, LoanEligibilityInput, LoanQuote, PayslipInput,
    SalaryComponents,
};

use super::request::{KpiRequest, KpiSummaryRequest, LoanQuoteRequest, PayrollRunRequest};
use super::response::{ApiError, ApiErrorResponse, PayrollRunResponse, PayslipResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", post(salary_handler))
        .route("/contributions", post(contribution_handler))
        .route("/loans/eligibility", post(loan_eligibility_handler))
        .route("/loans/amortize", post(loan_amortize_handler))
        .route("/loans/quote", post(loan_quote_handler))
        .route("/kpi/classify", post(kpi_classify_handler))
        .route("/kpi/summary", post(kpi_summary_handler))
        .route("/payslip", post(payslip_handler))
        .route("/payroll/summary", post(payroll_summary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
    endpoint: &'static str,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                endpoint,
                error = %body_text,
                "JSON data error"
            );
            let is_validation = ["missing field", "unknown field", "unknown variant"]
                .iter()
                .any(|needle| body_text.contains(needle));
            if is_validation {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                endpoint,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response())
}

/// Logs the outcome of a calculation and renders it.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    endpoint: &'static str,
    started: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                endpoint,
                duration_us = started.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(body)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                endpoint,
                error = %err,
                "Calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /salary.
async fn salary_handler(payload: Result<Json<SalaryComponents>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let input = match parse_body(payload, correlation_id, "salary") {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = input.validate().map(|()| compute_salary(&input));
    respond(correlation_id, "salary", started, result)
}

/// Handler for POST /contributions.
async fn contribution_handler(payload: Result<Json<ContributionInput>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let input = match parse_body(payload, correlation_id, "contributions") {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result =
        ensure_amount("basic_salary", input.basic_salary).map(|()| compute_contribution(&input));
    respond(correlation_id, "contributions", started, result)
}

/// Handler for POST /loans/eligibility.
///
/// Checks the applicant against every loan in the configured catalog.
async fn loan_eligibility_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoanEligibilityInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let input = match parse_body(payload, correlation_id, "loans/eligibility") {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = ensure_amount("basic_salary", input.basic_salary)
        .map(|()| check_eligibility(&input, state.config().loan_catalog()));
    respond(correlation_id, "loans/eligibility", started, result)
}

/// Handler for POST /loans/amortize.
async fn loan_amortize_handler(
    payload: Result<Json<LoanAmortizationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let input = match parse_body(payload, correlation_id, "loans/amortize") {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = amortize(
        input.amount,
        input.interest_rate_percent,
        input.duration_months,
    );
    respond(correlation_id, "loans/amortize", started, result)
}

fn run_loan_quote(config: &ConfigLoader, request: &LoanQuoteRequest) -> EngineResult<LoanQuote> {
    ensure_amount("applicant.basic_salary", request.applicant.basic_salary)?;
    let entry = config.get_loan(request.loan_type)?;
    quote_loan(
        &request.applicant,
        entry,
        request.amount,
        request.duration_months,
    )
}

/// Handler for POST /loans/quote.
async fn loan_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoanQuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match parse_body(payload, correlation_id, "loans/quote") {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = run_loan_quote(state.config(), &request);
    respond(correlation_id, "loans/quote", started, result)
}

/// Handler for POST /kpi/classify.
async fn kpi_classify_handler(payload: Result<Json<KpiRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match parse_body(payload, correlation_id, "kpi/classify") {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        "kpi/classify",
        started,
        classify(request.kpi_value),
    )
}

/// Handler for POST /kpi/summary.
async fn kpi_summary_handler(payload: Result<Json<KpiSummaryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match parse_body(payload, correlation_id, "kpi/summary") {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        "kpi/summary",
        started,
        summarize_kpis(&request.kpi_values),
    )
}

/// Handler for POST /payslip.
async fn payslip_handler(payload: Result<Json<PayslipInput>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let input = match parse_body(payload, correlation_id, "payslip") {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = compute_payslip(&input).map(|payslip| PayslipResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        payslip,
    });
    respond(correlation_id, "payslip", started, result)
}

/// Handler for POST /payroll/summary.
///
/// Computes every payslip in the run; the first invalid input rejects the
/// whole run.
async fn payroll_summary_handler(
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match parse_body(payload, correlation_id, "payroll/summary") {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = request
        .payslips
        .iter()
        .map(compute_payslip)
        .collect::<EngineResult<Vec<_>>>()
        .and_then(|payslips| {
            Ok(PayrollRunResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                summary: summarize_payroll(&payslips)?,
                payslips,
            })
        });
    respond(correlation_id, "payroll/summary", started, result)
}
