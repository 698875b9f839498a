//! Age resolution from a national identifier.
//!
//! This module derives a worker's age from the birth date encoded in the
//! first seven digits of the national identifier. The exemption rules for
//! employment insurance and national pension key off this age.

use chrono::{Datelike, NaiveDate};

/// Resolves a worker's age in whole years as of a reference date.
///
/// Only the first seven digits of the identifier are meaningful:
/// positions 0-1 are a two-digit birth year, 2-3 the month, 4-5 the day,
/// and position 6 the century/sex code. Separator characters (anything
/// that is not an ASCII digit) are stripped before indexing.
///
/// Century codes 1, 2, 5 and 6 place the birth year in the 1900s; codes
/// 3, 4, 7 and 8 in the 2000s. Any other code falls back to the 1900s.
/// The fallback mirrors the source computation and is pending product
/// confirmation; do not change it without revisiting stored reports.
///
/// An identifier with fewer than seven digits yields age 0 rather than an
/// error. The engine runs inside interactive report generation, where a
/// defensive default degrades the output less than a hard failure.
///
/// # Arguments
///
/// * `national_id` - The identifier string, with or without separator
/// * `reference` - The date to compute the age at
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::resolve_age;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
///
/// // Born 1960-03-15, birthday reached on the reference date
/// assert_eq!(resolve_age("600315-1234567", reference), 66);
///
/// // Born 2001-03-04, century code 3
/// assert_eq!(resolve_age("0103043456789", reference), 25);
///
/// // Too short to carry a birth date
/// assert_eq!(resolve_age("12345", reference), 0);
/// ```
pub fn resolve_age(national_id: &str, reference: NaiveDate) -> i32 {
    let digits: Vec<u32> = national_id
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c.to_digit(10).unwrap_or(0))
        .collect();

    if digits.len() < 7 {
        return 0;
    }

    let year_in_century = (digits[0] * 10 + digits[1]) as i32;
    let birth_month = digits[2] * 10 + digits[3];
    let birth_day = digits[4] * 10 + digits[5];

    let century = match digits[6] {
        1 | 2 | 5 | 6 => 1900,
        3 | 4 | 7 | 8 => 2000,
        _ => 1900,
    };
    let birth_year = century + year_in_century;

    let mut age = reference.year() - birth_year;
    if (reference.month(), reference.day()) < (birth_month, birth_day) {
        age -= 1;
    }
    age
}
