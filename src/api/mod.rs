//! HTTP API module for the deduction engine.
//!
//! This module provides the REST API endpoint for generating monthly
//! day-labor payroll reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MonthlyPayrollRequest, WorkerRequest};
pub use response::{ApiError, MonthlyPayrollResponse};
pub use state::AppState;
