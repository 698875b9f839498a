//! Monthly payroll aggregation.
//!
//! This module folds a worker's raw attendance entries for one calendar
//! month into the totals the deduction calculator needs, then assembles
//! the masked, report-ready payroll entry.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, MonthlyPayrollEntry, Worker};

use super::deductions::calculate_deductions;
use super::masking::mask_national_id;

/// Day of month used as the age reference for a monthly report. A fixed
/// mid-month anchor keeps the resolved age independent of which day the
/// report is generated.
const REFERENCE_DAY: u32 = 15;

/// Builds one worker's monthly payroll entry from raw attendance entries.
///
/// Entries outside the target month contribute nothing: they are dropped
/// before any total is formed. Several entries on the same calendar day
/// are summed into that day's man-day figure but still count as a single
/// work-day for the exemption rules.
///
/// # Arguments
///
/// * `worker` - The worker with identity fields and calculation profile
/// * `entries` - Raw attendance entries, any months mixed
/// * `rates` - The rate table for the target year
/// * `year` - The target calendar year
/// * `month` - The target month, 1-12
///
/// # Errors
///
/// Returns `InvalidPeriod` when `month` does not denote a real calendar
/// month. This is the only failure; a month with no entries yields a
/// zero-total entry rather than an error.
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::build_monthly_entry;
/// use daywage_engine::config::rate_table_2026;
/// use daywage_engine::models::{AttendanceEntry, Worker, WorkerProfile};
/// use chrono::NaiveDate;
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
/// let entries = vec![AttendanceEntry {
///     work_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     man_days: Decimal::ONE,
/// }];
///
/// let entry = build_monthly_entry(&worker, &entries, &rate_table_2026(), 2026, 3).unwrap();
/// assert_eq!(entry.total_days, 1);
/// assert_eq!(entry.masked_id, "900101-1******");
/// ```
pub fn build_monthly_entry(
    worker: &Worker,
    entries: &[AttendanceEntry],
    rates: &RateTable,
    year: i32,
    month: u32,
) -> EngineResult<MonthlyPayrollEntry> {
    let reference = NaiveDate::from_ymd_opt(year, month, REFERENCE_DAY)
        .ok_or(EngineError::InvalidPeriod { year, month })?;

    let mut work_days: BTreeMap<u32, Decimal> = BTreeMap::new();
    for entry in entries {
        if entry.work_date.year() == year && entry.work_date.month() == month {
            *work_days.entry(entry.work_date.day()).or_insert(Decimal::ZERO) += entry.man_days;
        }
    }

    let total_man_days: Decimal = work_days.values().copied().sum();
    let total_days = work_days.len() as u32;
    let total_labor_cost = worker.profile.daily_rate * total_man_days;

    let deductions =
        calculate_deductions(&worker.profile, total_man_days, total_days, rates, reference);

    Ok(MonthlyPayrollEntry {
        name: worker.name.clone(),
        job_type: worker.job_type.clone(),
        team: worker.team.clone(),
        masked_id: mask_national_id(&worker.profile.national_id),
        work_days,
        total_days,
        total_man_days,
        total_labor_cost,
        deductions,
    })
}
