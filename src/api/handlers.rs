//! HTTP request handlers for the deduction engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_monthly_entry;
use crate::models::{MonthlyPayrollEntry, Worker};

use super::request::MonthlyPayrollRequest;
use super::response::{ApiError, ApiErrorResponse, MonthlyPayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/monthly", post(monthly_payroll_handler))
        .with_state(state)
}

/// Handler for POST /payroll/monthly.
///
/// Accepts a batch of workers with raw attendance entries and returns
/// the masked, report-ready payroll entries for the target month.
async fn monthly_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly payroll request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the rate table for the target year up front
    let rates = match state.rates().get(request.year) {
        Ok(rates) => rates,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = request.year,
                "No rate table for requested year"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let mut entries: Vec<MonthlyPayrollEntry> = Vec::with_capacity(request.workers.len());

    for worker_request in request.workers {
        let attendance = worker_request.entries.clone();
        let worker: Worker = worker_request.into();

        match build_monthly_entry(&worker, &attendance, rates, request.year, request.month) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    worker = %worker.name,
                    error = %err,
                    "Payroll entry failed"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        }
    }

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        workers_count = entries.len(),
        duration_us = duration.as_micros(),
        "Monthly payroll computed successfully"
    );

    let response = MonthlyPayrollResponse {
        year: request.year,
        month: request.month,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::WorkerRequest;
    use crate::config::RateBook;
    use crate::models::AttendanceEntry;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(RateBook::builtin())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> MonthlyPayrollRequest {
        let entries = (2..12)
            .map(|d| AttendanceEntry {
                work_date: NaiveDate::from_ymd_opt(2026, 3, d).unwrap(),
                man_days: Decimal::ONE,
            })
            .collect();

        MonthlyPayrollRequest {
            year: 2026,
            month: 3,
            workers: vec![WorkerRequest {
                name: "Kim Cheol-su".to_string(),
                job_type: "rebar".to_string(),
                team: "Team A".to_string(),
                daily_rate: dec("200000"),
                national_id: "900101-1234567".to_string(),
                is_foreign: false,
                visa_status: None,
                entries,
            }],
        }
    }

    async fn post_payroll(
        router: Router,
        body: String,
    ) -> (StatusCode, axum::body::Bytes) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll/monthly")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes)
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, bytes) = post_payroll(router, body).await;
        assert_eq!(status, StatusCode::OK);

        let result: MonthlyPayrollResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.year, 2026);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].deductions.net_pay, dec("1881480"));
        assert_eq!(result.entries[0].masked_id, "900101-1******");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, bytes) = post_payroll(router, "{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let router = create_router(create_test_state());

        // Worker without a daily_rate field
        let body = r#"{
            "year": 2026,
            "month": 3,
            "workers": [{
                "name": "Kim Cheol-su",
                "job_type": "rebar",
                "team": "Team A",
                "national_id": "900101-1234567",
                "is_foreign": false
            }]
        }"#;

        let (status, bytes) = post_payroll(router, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("daily_rate"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_unknown_year_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.year = 2019;
        let body = serde_json::to_string(&request).unwrap();

        let (status, bytes) = post_payroll(router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "RATE_TABLE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_005_invalid_month_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.month = 13;
        let body = serde_json::to_string(&request).unwrap();

        let (status, bytes) = post_payroll(router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_empty_worker_list_returns_empty_report() {
        let router = create_router(create_test_state());

        let request = MonthlyPayrollRequest {
            year: 2026,
            month: 3,
            workers: vec![],
        };
        let body = serde_json::to_string(&request).unwrap();

        let (status, bytes) = post_payroll(router, body).await;
        assert_eq!(status, StatusCode::OK);

        let result: MonthlyPayrollResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(result.entries.is_empty());
    }
}
