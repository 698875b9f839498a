//! Per-insurance exemption rules.
//!
//! Whether a deduction category is withheld at all depends on the
//! worker's age, the number of distinct days worked in the month, and
//! foreign-worker status. Each category's rule is evaluated on its own;
//! no category's decision feeds another's.

use serde::{Deserialize, Serialize};

/// The four insurance categories subject to exemption rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceCategory {
    /// Employment insurance.
    Employment,
    /// National pension.
    NationalPension,
    /// Health insurance.
    Health,
    /// Long-term care insurance. Rides on the health premium, so it
    /// shares the health exemption rule.
    LongtermCare,
}

impl InsuranceCategory {
    /// Parses a category tag as used by the surrounding system's forms
    /// and exports. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "employment" => Some(Self::Employment),
            "national_pension" => Some(Self::NationalPension),
            "health" => Some(Self::Health),
            "longterm_care" => Some(Self::LongtermCare),
            _ => None,
        }
    }
}

/// Decides whether a worker is exempt from a deduction category.
///
/// `work_days` is the count of distinct calendar days worked in the
/// month, not the man-day sum; a worker logging 10 man-days over 5
/// calendar days has 5 work-days here.
///
/// Rules:
/// - `Employment`: exempt from age 65.
/// - `NationalPension`: exempt from age 60, under 8 work-days, or for
///   foreign workers.
/// - `Health` and `LongtermCare`: exempt under 8 work-days or for
///   foreign workers.
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::{InsuranceCategory, is_exempt};
///
/// // 8+ work-days, under 60, domestic: withheld everywhere
/// assert!(!is_exempt(InsuranceCategory::NationalPension, 45, 10, false));
///
/// // Short month: pension and health drop out, employment does not
/// assert!(is_exempt(InsuranceCategory::NationalPension, 45, 5, false));
/// assert!(is_exempt(InsuranceCategory::Health, 45, 5, false));
/// assert!(!is_exempt(InsuranceCategory::Employment, 45, 5, false));
/// ```
pub fn is_exempt(category: InsuranceCategory, age: i32, work_days: u32, is_foreign: bool) -> bool {
    match category {
        InsuranceCategory::Employment => age >= 65,
        InsuranceCategory::NationalPension => age >= 60 || work_days < 8 || is_foreign,
        InsuranceCategory::Health | InsuranceCategory::LongtermCare => {
            work_days < 8 || is_foreign
        }
    }
}

/// Tag-boundary variant of [`is_exempt`] for callers holding a raw
/// category string. Unknown tags are never exempt, so an unrecognized
/// category keeps being withheld rather than silently dropped.
pub fn is_exempt_tag(tag: &str, age: i32, work_days: u32, is_foreign: bool) -> bool {
    match InsuranceCategory::from_tag(tag) {
        Some(category) => is_exempt(category, age, work_days, is_foreign),
        None => false,
    }
}
