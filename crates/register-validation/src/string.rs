//! String validation functions

use crate::Outcome;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const ALPHABETIC_MESSAGE: &str = "Only letters and spaces are allowed";

/// Fails when the trimmed value is empty
pub fn required(value: &str) -> Outcome {
    if value.trim().is_empty() {
        Err(REQUIRED_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

/// Validates minimum length of the trimmed value, counted in characters
pub fn min_length(value: &str, min: usize) -> Outcome {
    if value.trim().chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn max_length(value: &str, max: usize) -> Outcome {
    if value.trim().chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Letters (any script) and spaces only
pub fn is_alphabetic(value: &str) -> Outcome {
    if value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(())
    } else {
        Err(ALPHABETIC_MESSAGE.to_string())
    }
}

/// Exact equality with the live value of `target_field`
pub fn matches(value: &str, target_value: &str, target_field: &str) -> Outcome {
    if value == target_value {
        Ok(())
    } else {
        Err(format!("Does not match {}", target_field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("x").is_ok());
        assert!(required("  padded  ").is_ok());
        assert_eq!(required("").unwrap_err(), REQUIRED_MESSAGE);
        assert_eq!(required(" \t\n").unwrap_err(), REQUIRED_MESSAGE);
    }

    #[test]
    fn test_length_validators() {
        assert!(min_length("Al", 2).is_ok());
        assert!(min_length("A", 2).is_err());
        // surrounding whitespace does not count
        assert!(min_length(" A ", 2).is_err());
        // characters, not bytes
        assert!(min_length("É", 2).is_err());
        assert!(min_length("Éa", 2).is_ok());

        assert!(max_length("hello", 5).is_ok());
        assert!(max_length("hello!", 5).is_err());
        assert_eq!(
            min_length("", 2).unwrap_err(),
            "Must be at least 2 characters"
        );
        assert_eq!(
            max_length("abcdef", 5).unwrap_err(),
            "Must be at most 5 characters"
        );
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("Ada Lovelace").is_ok());
        assert!(is_alphabetic("Zoë Ångström").is_ok());
        assert!(is_alphabetic("").is_ok());
        assert!(is_alphabetic("R2D2").is_err());
        assert!(is_alphabetic("O'Brien").is_err());
        assert!(is_alphabetic("Mary-Jane").is_err());
    }

    #[test]
    fn test_matches() {
        assert!(matches("x", "x", "password").is_ok());
        assert_eq!(
            matches("y", "x", "password").unwrap_err(),
            "Does not match password"
        );
        // comparison is exact, no trimming
        assert!(matches("x ", "x", "password").is_err());
    }
}
