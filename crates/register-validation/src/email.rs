//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Outcome;

pub const EMAIL_MESSAGE: &str = "Invalid email address";

// Email validation regex: single address, dot-separated local part,
// domain labels that neither start nor end with '-', alphabetic TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9_%+-]+(\.[a-zA-Z0-9_%+-]+)*",
        r"@[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?",
        r"(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*",
        r"\.[a-zA-Z]{2,}$",
    ))
    .expect("email pattern compiles")
});

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - No leading, trailing or doubled '.' in the local part
/// - At least one '.' in the domain, no empty labels, no label starting or
///   ending with '-'
/// - Top-level domain of two or more letters
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn email(value: &str) -> Outcome {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE.to_string())
    }
}
