//! Password validation functions

use serde::{Deserialize, Serialize};

use crate::Outcome;

/// Minimum-strength password policy
///
/// The default is 8+ characters with an uppercase letter, a lowercase letter,
/// a digit and a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_upper: bool,
    pub require_lower: bool,
    pub require_digit: bool,
    /// Any character that is neither alphanumeric nor whitespace
    pub require_symbol: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_upper: true,
            require_lower: true,
            require_digit: true,
            require_symbol: true,
        }
    }
}

impl PasswordPolicy {
    /// Criteria the password does not meet, in a fixed order
    pub fn unmet(&self, password: &str) -> Vec<String> {
        let mut unmet = Vec::new();

        if password.chars().count() < self.min_length {
            unmet.push(format!("at least {} characters", self.min_length));
        }
        if self.require_upper && !password.chars().any(char::is_uppercase) {
            unmet.push("an uppercase letter".to_string());
        }
        if self.require_lower && !password.chars().any(char::is_lowercase) {
            unmet.push("a lowercase letter".to_string());
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            unmet.push("a digit".to_string());
        }
        if self.require_symbol && !password.chars().any(is_symbol) {
            unmet.push("a symbol".to_string());
        }

        unmet
    }

    /// Single composite message listing every unmet criterion
    pub fn validate(&self, password: &str) -> Outcome {
        let unmet = self.unmet(password);
        if unmet.is_empty() {
            Ok(())
        } else {
            Err(format!("Password must contain {}", unmet.join(", ")))
        }
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}
