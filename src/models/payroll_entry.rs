//! Payroll result models.
//!
//! This module contains the [`DeductionResult`] produced by the deduction
//! calculator and the report-facing [`MonthlyPayrollEntry`] assembled by
//! the monthly aggregator. Both are derived values: computed fresh on each
//! report request and never persisted by the engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five statutory withholding amounts for one worker and period.
///
/// Invariants:
/// - `total_deductions` is the exact sum of the six amount fields.
/// - `net_pay + total_deductions` equals the period's total labor cost.
///
/// # Example
///
/// ```
/// use daywage_engine::models::DeductionResult;
/// use rust_decimal::Decimal;
///
/// let result = DeductionResult {
///     income_tax: Decimal::from(13500),
///     resident_tax: Decimal::from(1350),
///     health_insurance: Decimal::from(35950),
///     longterm_care: Decimal::from(4720),
///     national_pension: Decimal::from(45000),
///     employment_insurance: Decimal::from(18000),
///     total_deductions: Decimal::from(118_520),
///     net_pay: Decimal::from(1_881_480),
/// };
/// assert_eq!(result.total_deductions, Decimal::from(118_520));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Simplified daily income tax, summed over the period's man-days.
    pub income_tax: Decimal,
    /// Resident (local) tax, a fraction of the income tax.
    pub resident_tax: Decimal,
    /// Health insurance premium, worker's half, after clamping.
    pub health_insurance: Decimal,
    /// Long-term care insurance, a fraction of the health premium.
    pub longterm_care: Decimal,
    /// National pension contribution, worker's half of the clamped base.
    pub national_pension: Decimal,
    /// Employment insurance premium over the whole period.
    pub employment_insurance: Decimal,
    /// Sum of the six deduction amounts above.
    pub total_deductions: Decimal,
    /// Total labor cost minus total deductions.
    pub net_pay: Decimal,
}

/// One worker's row in a monthly payroll report.
///
/// Assembled by the monthly aggregator from raw attendance entries. The
/// national identifier is masked before it reaches this struct; report
/// renderers and export writers never see the full identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayrollEntry {
    /// The worker's display name.
    pub name: String,
    /// The worker's trade.
    pub job_type: String,
    /// The team or crew the worker belongs to.
    pub team: String,
    /// The masked national identifier (first 6 digits + century/sex digit
    /// preserved, remainder redacted).
    pub masked_id: String,
    /// Day of month → man-days recorded on that day.
    pub work_days: BTreeMap<u32, Decimal>,
    /// Count of distinct calendar days with at least one entry.
    pub total_days: u32,
    /// Sum of man-days over the month. May exceed `total_days` when more
    /// than one man-day is recorded for a single day.
    pub total_man_days: Decimal,
    /// `daily_rate × total_man_days`.
    pub total_labor_cost: Decimal,
    /// The statutory withholding amounts for the month.
    pub deductions: DeductionResult,
}
