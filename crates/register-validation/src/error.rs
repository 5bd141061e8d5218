//! Configuration errors
//!
//! These are developer mistakes in a rule set, not user input problems.
//! User-facing failures are plain message strings returned as data.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A bare rule identifier with no built-in or registered evaluator
    #[error("unknown validation rule '{0}'")]
    UnknownRule(String),

    /// A parameterized rule written without its argument, e.g. `"minLength"`
    #[error("rule '{0}' requires a parameter")]
    MissingParameter(String),

    /// Rule text that could not be parsed, e.g. `minLength(two)`
    #[error("invalid rule '{0}'")]
    InvalidRule(String),

    /// Field has no rule list in the rule set
    #[error("no rules configured for field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' matches against unknown field '{target}'")]
    UnknownMatchTarget { field: String, target: String },

    #[error("field '{0}' cannot match against itself")]
    SelfMatch(String),

    #[error("field '{field}' has minLength {min} greater than maxLength {max}")]
    ConflictingLengthBounds { field: String, min: usize, max: usize },
}
