//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Outcome;

pub const PHONE_MESSAGE: &str = "Invalid phone number";

/// Plausible digit count once separators are stripped
pub const MIN_DIGITS: usize = 7;
pub const MAX_DIGITS: usize = 15;

// Optional leading '+', then digits and common separators only;
// opens with a digit or '(' and closes with a digit or ')'
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9(]([0-9 ().-]*[0-9)])?$").expect("phone pattern compiles")
});

/// Accepts `5551234567`, `+1 (555) 123-4567`, `(555) 123-4567`, `555.123.4567`
pub fn is_valid_phone(phone: &str) -> bool {
    if !PHONE_REGEX.is_match(phone) || !balanced(phone) {
        return false;
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
}

fn balanced(phone: &str) -> bool {
    let mut depth = 0u32;
    for c in phone.chars() {
        match c {
            '(' if depth > 0 => return false,
            '(' => depth += 1,
            ')' if depth == 0 => return false,
            ')' => depth -= 1,
            _ => {}
        }
    }
    depth == 0
}

pub fn phone(value: &str) -> Outcome {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(PHONE_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("555-1234"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+442071838750"));
        assert!(is_valid_phone("123456789012345"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("555 123 4567 ext 2"));
        assert!(!is_valid_phone("++15551234567"));
        assert!(!is_valid_phone("--- ---"));
    }

    #[test]
    fn test_parentheses_and_trailing_separators() {
        assert!(!is_valid_phone("((((((1234567"));
        assert!(!is_valid_phone("(555 123-4567"));
        assert!(!is_valid_phone("555) 123-4567"));
        assert!(!is_valid_phone("((555)) 123-4567"));
        assert!(!is_valid_phone("5551234567---"));
        assert!(!is_valid_phone("555 123 4567 "));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("(555)1234567"));
    }

    #[test]
    fn test_phone_message() {
        assert_eq!(phone("12").unwrap_err(), PHONE_MESSAGE);
    }
}
