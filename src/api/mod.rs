//! HTTP API module for the Payroll Calculation Engine.
//!
//! A thin JSON adapter through which the UI layer invokes the calculators.
//! It owns boundary validation and request logging; the calculators stay
//! pure.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{KpiRequest, KpiSummaryRequest, LoanQuoteRequest, PayrollRunRequest};
pub use response::{ApiError, ApiErrorResponse, PayrollRunResponse, PayslipResponse};
pub use state::AppState;
