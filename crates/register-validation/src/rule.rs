//! Declarative validation rules
//!
//! A rule list is written the way a form author would write it by hand:
//! bare identifiers for plain checks and single-key objects for rules that
//! take an argument.
//!
//! ```json
//! ["required", { "minLength": 2 }, "isAlphabetic"]
//! ["required", { "matches": "password" }]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A single validation rule attached to a form field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub enum Rule {
    /// Trimmed value must not be empty
    Required,
    /// Trimmed value must have at least `n` characters
    MinLength(usize),
    /// Trimmed value must have at most `n` characters
    MaxLength(usize),
    /// Letters and spaces only
    IsAlphabetic,
    Email,
    Phone,
    /// `YYYY-MM-DD` date of birth old enough to register
    IsAdult,
    /// Password strength policy
    Password,
    /// Value must equal the live value of the named field
    Matches(String),
    /// Caller-registered rule, resolved through the registry at validation time
    Custom(String),
}

impl Rule {
    /// Build a `matches` rule against another field
    pub fn matches(field: impl Into<String>) -> Self {
        Rule::Matches(field.into())
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Rule::Custom(name.into())
    }

    /// Rule identifier as written in a rule list
    pub fn name(&self) -> &str {
        match self {
            Rule::Required => "required",
            Rule::MinLength(_) => "minLength",
            Rule::MaxLength(_) => "maxLength",
            Rule::IsAlphabetic => "isAlphabetic",
            Rule::Email => "email",
            Rule::Phone => "phone",
            Rule::IsAdult => "isAdult",
            Rule::Password => "password",
            Rule::Matches(_) => "matches",
            Rule::Custom(name) => name,
        }
    }

    /// Resolve a bare identifier
    ///
    /// Identifiers that are not built in become [`Rule::Custom`]; whether they
    /// exist is decided by the registry when the rule runs.
    fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "required" => Ok(Rule::Required),
            "isAlphabetic" => Ok(Rule::IsAlphabetic),
            "email" => Ok(Rule::Email),
            "phone" => Ok(Rule::Phone),
            "isAdult" => Ok(Rule::IsAdult),
            "password" => Ok(Rule::Password),
            "minLength" | "maxLength" | "matches" => {
                Err(ConfigError::MissingParameter(name.to_string()))
            }
            custom if is_identifier(custom) => Ok(Rule::Custom(custom.to_string())),
            other => Err(ConfigError::InvalidRule(other.to_string())),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MinLength(n) | Rule::MaxLength(n) => write!(f, "{}({})", self.name(), n),
            Rule::Matches(field) => write!(f, "matches({})", field),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses the text form used on the command line and in logs:
/// `required`, `minLength(2)`, `matches(password)`.
impl FromStr for Rule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidRule(s.to_string());

        let Some((name, rest)) = s.split_once('(') else {
            return Rule::from_name(s);
        };
        let arg = rest.strip_suffix(')').ok_or_else(invalid)?.trim();

        match name.trim() {
            "minLength" => arg.parse().map(Rule::MinLength).map_err(|_| invalid()),
            "maxLength" => arg.parse().map(Rule::MaxLength).map_err(|_| invalid()),
            "matches" if is_identifier(arg) => Ok(Rule::matches(arg)),
            _ => Err(invalid()),
        }
    }
}

/// Wire shape of a rule: a bare identifier or a single-key parameter object
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawRule {
    Bare(String),
    Param(ParamRule),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum ParamRule {
    MinLength(usize),
    MaxLength(usize),
    Matches(String),
}

impl TryFrom<RawRule> for Rule {
    type Error = ConfigError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        match raw {
            RawRule::Bare(name) => Rule::from_name(&name),
            RawRule::Param(ParamRule::MinLength(n)) => Ok(Rule::MinLength(n)),
            RawRule::Param(ParamRule::MaxLength(n)) => Ok(Rule::MaxLength(n)),
            RawRule::Param(ParamRule::Matches(field)) => Ok(Rule::Matches(field)),
        }
    }
}

impl From<Rule> for RawRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::MinLength(n) => RawRule::Param(ParamRule::MinLength(n)),
            Rule::MaxLength(n) => RawRule::Param(ParamRule::MaxLength(n)),
            Rule::Matches(field) => RawRule::Param(ParamRule::Matches(field)),
            Rule::Custom(name) => RawRule::Bare(name),
            other => RawRule::Bare(other.name().to_string()),
        }
    }
}
