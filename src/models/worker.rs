//! Worker models.
//!
//! This module defines the WorkerProfile struct consumed by the deduction
//! calculator and the report-facing Worker wrapper that carries identity
//! fields alongside it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The calculation-relevant attributes of a day-labor worker.
///
/// The engine treats the profile as read-only input; validation of the
/// national identifier is the caller's responsibility. A malformed
/// identifier does not fail a calculation — age resolution falls back
/// to 0, which drives the age-based exemptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// Wage per man-day in KRW. Expected to be positive.
    pub daily_rate: Decimal,
    /// National identifier; the 7th digit encodes birth century and sex.
    /// May contain a separator (e.g. "900101-1234567").
    pub national_id: String,
    /// Whether the worker is a foreign national. Foreign workers are
    /// exempt from national pension and health insurance withholding.
    pub is_foreign: bool,
    /// Visa status descriptor. Carried for future exemption rules;
    /// unused by the current ones.
    #[serde(default)]
    pub visa_status: Option<String>,
}

/// A worker as it appears on a monthly payroll report.
///
/// Wraps the calculation profile with the identity fields the report
/// renderer needs.
///
/// # Examples
///
/// ```
/// use daywage_engine::models::{Worker, WorkerProfile};
/// use rust_decimal::Decimal;
///
/// let worker = Worker {
///     name: "Kim Cheol-su".to_string(),
///     job_type: "rebar".to_string(),
///     team: "Team A".to_string(),
///     profile: WorkerProfile {
///         daily_rate: Decimal::from(200_000),
///         national_id: "900101-1234567".to_string(),
///         is_foreign: false,
///         visa_status: None,
///     },
/// };
/// assert!(!worker.profile.is_foreign);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// The worker's display name.
    pub name: String,
    /// The worker's trade (e.g. "rebar", "formwork").
    pub job_type: String,
    /// The team or crew the worker belongs to.
    pub team: String,
    /// The calculation-relevant profile.
    pub profile: WorkerProfile,
}
