//! Rule dispatch table
//!
//! Maps every [`Rule`] to its evaluator. Built-in rules dispatch to the pure
//! functions in the evaluator modules; [`Rule::Custom`] looks up a
//! caller-registered evaluator and fails with a [`ConfigError`] when none is
//! registered, so a misspelled rule never reads as "valid".

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use crate::{date, email, phone, string};
use crate::{ConfigError, FormData, Outcome, Rule, ValidatorOptions};

/// Everything an evaluator may look at besides the field's own value
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Field being validated
    pub field: &'a str,
    /// Live form snapshot
    pub form: &'a FormData,
    /// Evaluation date for age checks
    pub today: NaiveDate,
    pub options: &'a ValidatorOptions,
}

/// Caller-supplied evaluator for a [`Rule::Custom`] rule
pub type CustomEvaluator = Box<dyn Fn(&str, &RuleContext<'_>) -> Outcome + Send + Sync>;

#[derive(Default)]
pub struct RuleRegistry {
    custom: HashMap<String, CustomEvaluator>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom rule under `name`
    ///
    /// Built-in identifiers cannot be overridden and names must be plain
    /// identifiers (`[A-Za-z0-9_-]`).
    pub fn register<F>(&mut self, name: impl Into<String>, evaluator: F) -> Result<(), ConfigError>
    where
        F: Fn(&str, &RuleContext<'_>) -> Outcome + Send + Sync + 'static,
    {
        let name = name.into();
        match name.parse::<Rule>() {
            Ok(Rule::Custom(_)) => {
                self.custom.insert(name, Box::new(evaluator));
                Ok(())
            }
            _ => Err(ConfigError::InvalidRule(name)),
        }
    }

    /// Whether `rule` has an evaluator
    pub fn resolves(&self, rule: &Rule) -> bool {
        match rule {
            Rule::Custom(name) => self.custom.contains_key(name),
            _ => true,
        }
    }

    /// Run `rule` against `value`
    ///
    /// The outer `Result` carries configuration errors, the inner one the
    /// validation outcome.
    pub fn evaluate(
        &self,
        rule: &Rule,
        value: &str,
        ctx: &RuleContext<'_>,
    ) -> Result<Outcome, ConfigError> {
        let outcome = match rule {
            Rule::Required => string::required(value),
            Rule::MinLength(min) => string::min_length(value, *min),
            Rule::MaxLength(max) => string::max_length(value, *max),
            Rule::IsAlphabetic => string::is_alphabetic(value),
            Rule::Email => email::email(value),
            Rule::Phone => phone::phone(value),
            Rule::IsAdult => date::is_adult(value, ctx.today, ctx.options.min_age),
            Rule::Password => ctx.options.password.validate(value),
            Rule::Matches(target) => {
                let target_value =
                    ctx.form
                        .get(target)
                        .ok_or_else(|| ConfigError::UnknownMatchTarget {
                            field: ctx.field.to_string(),
                            target: target.clone(),
                        })?;
                string::matches(value, target_value, target)
            }
            Rule::Custom(name) => {
                let evaluator = self
                    .custom
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownRule(name.clone()))?;
                evaluator(value, ctx)
            }
        };
        Ok(outcome)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.custom.keys().collect();
        names.sort();
        f.debug_struct("RuleRegistry").field("custom", &names).finish()
    }
}
