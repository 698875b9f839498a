//! Rate table types for statutory deductions.
//!
//! This module contains the strongly-typed rate table deserialized from
//! YAML rate files, plus the built-in tables for the years the engine
//! ships with.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The statutory rates and limits for one effective year.
///
/// A `RateTable` is immutable once constructed and is passed explicitly
/// into every calculation; the engine holds no global rate state. The
/// `longterm_care_rate` is a fraction of the computed health premium,
/// not of the wage, and `health_premium_lower`/`health_premium_upper`
/// clamp the computed premium itself rather than the wage base.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The calendar year these rates apply to.
    pub effective_year: i32,
    /// Flat daily exemption subtracted from the wage before income tax.
    pub income_deduction: Decimal,
    /// Simplified income tax rate applied to the taxable daily wage.
    pub simplified_tax_rate: Decimal,
    /// Resident tax as a fraction of the income tax.
    pub local_tax_rate: Decimal,
    /// Employment insurance rate applied to the wage.
    pub employment_insurance_rate: Decimal,
    /// Health insurance rate applied to the wage (split employer/worker).
    pub health_insurance_rate: Decimal,
    /// Long-term care rate as a fraction of the health premium.
    pub longterm_care_rate: Decimal,
    /// National pension rate applied to the clamped contribution base.
    pub national_pension_rate: Decimal,
    /// Ceiling on the monthly pension contribution base.
    pub pension_upper_limit: Decimal,
    /// Floor on the monthly pension contribution base.
    pub pension_lower_limit: Decimal,
    /// Ceiling on the computed monthly health premium.
    pub health_premium_upper: Decimal,
    /// Floor on the computed monthly health premium.
    pub health_premium_lower: Decimal,
}

/// Returns the built-in rate table for 2025.
pub fn rate_table_2025() -> RateTable {
    RateTable {
        effective_year: 2025,
        income_deduction: Decimal::new(150_000, 0),
        simplified_tax_rate: Decimal::new(27, 3),
        local_tax_rate: Decimal::new(1, 1),
        employment_insurance_rate: Decimal::new(9, 3),
        health_insurance_rate: Decimal::new(3545, 5),
        longterm_care_rate: Decimal::new(1295, 4),
        national_pension_rate: Decimal::new(45, 3),
        pension_upper_limit: Decimal::new(5_900_000, 0),
        pension_lower_limit: Decimal::new(370_000, 0),
        health_premium_upper: Decimal::new(4_504_170, 0),
        health_premium_lower: Decimal::new(19_780, 0),
    }
}

/// Returns the built-in rate table for 2026.
pub fn rate_table_2026() -> RateTable {
    RateTable {
        effective_year: 2026,
        income_deduction: Decimal::new(150_000, 0),
        simplified_tax_rate: Decimal::new(27, 3),
        local_tax_rate: Decimal::new(1, 1),
        employment_insurance_rate: Decimal::new(9, 3),
        health_insurance_rate: Decimal::new(3595, 5),
        longterm_care_rate: Decimal::new(1314, 4),
        national_pension_rate: Decimal::new(45, 3),
        pension_upper_limit: Decimal::new(6_170_000, 0),
        pension_lower_limit: Decimal::new(390_000, 0),
        health_premium_upper: Decimal::new(7_822_560, 0),
        health_premium_lower: Decimal::new(19_780, 0),
    }
}
