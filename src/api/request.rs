//! Request types for the deduction engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/monthly` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceEntry, Worker, WorkerProfile};

/// Request body for the `/payroll/monthly` endpoint.
///
/// Carries the target period and every worker to include in the report,
/// each with their raw attendance entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPayrollRequest {
    /// The target calendar year.
    pub year: i32,
    /// The target month, 1-12.
    pub month: u32,
    /// The workers to compute entries for.
    pub workers: Vec<WorkerRequest>,
}

/// One worker with attendance in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// The worker's display name.
    pub name: String,
    /// The worker's trade.
    pub job_type: String,
    /// The team or crew the worker belongs to.
    pub team: String,
    /// Wage per man-day in KRW.
    pub daily_rate: Decimal,
    /// National identifier, with or without separator.
    pub national_id: String,
    /// Whether the worker is a foreign national.
    pub is_foreign: bool,
    /// Visa status descriptor, if any.
    #[serde(default)]
    pub visa_status: Option<String>,
    /// The worker's raw attendance entries. Entries outside the target
    /// month are ignored.
    #[serde(default)]
    pub entries: Vec<AttendanceEntry>,
}

impl From<WorkerRequest> for Worker {
    fn from(request: WorkerRequest) -> Self {
        Worker {
            name: request.name,
            job_type: request.job_type,
            team: request.team,
            profile: WorkerProfile {
                daily_rate: request.daily_rate,
                national_id: request.national_id,
                is_foreign: request.is_foreign,
                visa_status: request.visa_status,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "year": 2026,
            "month": 3,
            "workers": [{
                "name": "Kim Cheol-su",
                "job_type": "rebar",
                "team": "Team A",
                "daily_rate": "200000",
                "national_id": "900101-1234567",
                "is_foreign": false,
                "entries": [
                    {"work_date": "2026-03-02", "man_days": "1"}
                ]
            }]
        }"#;

        let request: MonthlyPayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.year, 2026);
        assert_eq!(request.month, 3);
        assert_eq!(request.workers.len(), 1);
        assert_eq!(request.workers[0].entries.len(), 1);
    }

    #[test]
    fn test_entries_default_to_empty() {
        let json = r#"{
            "year": 2026,
            "month": 3,
            "workers": [{
                "name": "Lee",
                "job_type": "formwork",
                "team": "Team B",
                "daily_rate": "150000",
                "national_id": "850505-2234567",
                "is_foreign": false
            }]
        }"#;

        let request: MonthlyPayrollRequest = serde_json::from_str(json).unwrap();
        assert!(request.workers[0].entries.is_empty());
        assert_eq!(request.workers[0].visa_status, None);
    }

    #[test]
    fn test_worker_request_converts_to_domain_worker() {
        let request = WorkerRequest {
            name: "Nguyen Van A".to_string(),
            job_type: "formwork".to_string(),
            team: "Team B".to_string(),
            daily_rate: Decimal::from(180_000),
            national_id: "950505-5678901".to_string(),
            is_foreign: true,
            visa_status: Some("E-9".to_string()),
            entries: vec![],
        };

        let worker: Worker = request.into();
        assert_eq!(worker.name, "Nguyen Van A");
        assert!(worker.profile.is_foreign);
        assert_eq!(worker.profile.visa_status.as_deref(), Some("E-9"));
    }
}
