//! Statutory deduction formulas.
//!
//! This module reproduces the reference payroll spreadsheet's five
//! withholding formulas. Each formula truncates to the nearest lower
//! multiple of 10 KRW at the exact point the spreadsheet does: income tax
//! truncates the per-day amount before multiplying by man-days, while
//! employment insurance truncates the whole-period product. That
//! asymmetry is deliberate and must match the spreadsheet cell for cell.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{DeductionResult, WorkerProfile};

use super::age::resolve_age;
use super::exemption::{InsuranceCategory, is_exempt};

/// Truncates toward zero to the nearest lower multiple of 10 currency
/// units, matching the spreadsheet's `ROUNDDOWN(value, -1)`.
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::truncate10;
/// use rust_decimal::Decimal;
///
/// assert_eq!(truncate10(Decimal::from(4723)), Decimal::from(4720));
/// assert_eq!(truncate10(Decimal::new(13509, 1)), Decimal::from(1350));
/// assert_eq!(truncate10(Decimal::from(9)), Decimal::ZERO);
/// ```
pub fn truncate10(value: Decimal) -> Decimal {
    (value / Decimal::TEN).trunc() * Decimal::TEN
}

/// Computes the five statutory withholding amounts for one worker and
/// period.
///
/// `total_man_days` is the aggregated labor volume (fractional allowed);
/// `total_work_days` is the count of distinct calendar days worked, which
/// is what the exemption rules look at. The worker's age is resolved from
/// the national identifier as of `reference`.
///
/// # Arguments
///
/// * `profile` - The worker's calculation-relevant attributes
/// * `total_man_days` - Sum of man-days over the period
/// * `total_work_days` - Distinct calendar days worked in the period
/// * `rates` - The rate table for the period's year
/// * `reference` - The date ages are resolved at
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::calculate_deductions;
/// use daywage_engine::config::rate_table_2026;
/// use daywage_engine::models::WorkerProfile;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let profile = WorkerProfile {
///     daily_rate: Decimal::from(200_000),
///     national_id: "900101-1234567".to_string(),
///     is_foreign: false,
///     visa_status: None,
/// };
/// let reference = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
///
/// let result = calculate_deductions(
///     &profile,
///     Decimal::from(10),
///     10,
///     &rate_table_2026(),
///     reference,
/// );
/// assert_eq!(result.income_tax, Decimal::from(13_500));
/// assert_eq!(result.net_pay, Decimal::from(1_881_480));
/// ```
pub fn calculate_deductions(
    profile: &WorkerProfile,
    total_man_days: Decimal,
    total_work_days: u32,
    rates: &RateTable,
    reference: NaiveDate,
) -> DeductionResult {
    let age = resolve_age(&profile.national_id, reference);
    let total_labor_cost = profile.daily_rate * total_man_days;

    // Income tax: truncate the per-day tax, then scale by man-days.
    let taxable_per_day = (profile.daily_rate - rates.income_deduction).max(Decimal::ZERO);
    let daily_tax = truncate10(taxable_per_day * rates.simplified_tax_rate);
    let income_tax = daily_tax * total_man_days;

    let resident_tax = truncate10(income_tax * rates.local_tax_rate);

    // Health insurance: worker's half of the premium, clamped after
    // truncation. The clamp applies to the premium, not the wage base.
    let health_insurance = if is_exempt(InsuranceCategory::Health, age, total_work_days, profile.is_foreign) {
        Decimal::ZERO
    } else {
        truncate10(total_labor_cost * rates.health_insurance_rate / Decimal::TWO)
            .clamp(rates.health_premium_lower, rates.health_premium_upper)
    };

    // Long-term care rides on the post-clamp health premium.
    let longterm_care = if is_exempt(InsuranceCategory::LongtermCare, age, total_work_days, profile.is_foreign) {
        Decimal::ZERO
    } else {
        truncate10(health_insurance * rates.longterm_care_rate)
    };

    // National pension: the wage base is clamped, then the rate applies.
    let national_pension = if is_exempt(InsuranceCategory::NationalPension, age, total_work_days, profile.is_foreign) {
        Decimal::ZERO
    } else {
        let base = total_labor_cost.clamp(rates.pension_lower_limit, rates.pension_upper_limit);
        truncate10(base * rates.national_pension_rate / Decimal::TWO)
    };

    // Employment insurance truncates the whole-period product, unlike
    // income tax which truncates per day.
    let employment_insurance = if is_exempt(InsuranceCategory::Employment, age, total_work_days, profile.is_foreign) {
        Decimal::ZERO
    } else {
        truncate10(profile.daily_rate * rates.employment_insurance_rate * total_man_days)
    };

    let total_deductions = income_tax
        + resident_tax
        + health_insurance
        + longterm_care
        + national_pension
        + employment_insurance;

    DeductionResult {
        income_tax,
        resident_tax,
        health_insurance,
        longterm_care,
        national_pension,
        employment_insurance,
        total_deductions,
        net_pay: total_labor_cost - total_deductions,
    }
}
