//! National identifier masking for report output.

/// The fixed-length redaction marker appended after the preserved digits.
pub const MASK_MARKER: &str = "******";

/// Masks a national identifier for report display and export.
///
/// Keeps the birth date digits (first six) and the century/sex digit,
/// and replaces everything after them with [`MASK_MARKER`]. The output
/// length is the same regardless of how long the input was. Masking is
/// lossy by design; there is no way back to the full identifier.
///
/// Inputs with fewer than seven digits cannot preserve the prefix and
/// collapse to the marker alone.
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::mask_national_id;
///
/// assert_eq!(mask_national_id("900101-1234567"), "900101-1******");
/// assert_eq!(mask_national_id("9001011234567"), "900101-1******");
/// assert_eq!(mask_national_id("12345"), "******");
/// ```
pub fn mask_national_id(national_id: &str) -> String {
    let digits: String = national_id.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 7 {
        return MASK_MARKER.to_string();
    }

    format!("{}-{}{}", &digits[..6], &digits[6..7], MASK_MARKER)
}
