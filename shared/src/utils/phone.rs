//! Phone number utilities
//!
//! Recipient validation is permissive: a candidate is accepted when it
//! carries enough digits to be dialable. Strict E.164 checking applies only
//! to the configured sender number.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of digits for a recipient to be considered dialable
pub const MIN_PHONE_DIGITS: usize = 10;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Count the ASCII digits in a candidate phone number
pub fn count_digits(candidate: &str) -> usize {
    candidate.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Check whether a candidate recipient plausibly is a phone number
///
/// Valid iff the candidate contains at least [`MIN_PHONE_DIGITS`] digits.
/// There is no upper bound, so country-code prefixed and punctuated numbers
/// such as `"+1 (555) 123-4567"` pass. Labels like `"Emergency Contact 1"`
/// do not.
pub fn is_plausible_phone_number(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    count_digits(trimmed) >= MIN_PHONE_DIGITS
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Mask a phone number for display and logs (e.g., +15****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
