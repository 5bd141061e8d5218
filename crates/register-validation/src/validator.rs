//! Field and form validation
//!
//! A [`Validator`] walks a field's rule list in order and stops at the first
//! failing rule. Validation keeps no state between calls: the same arguments
//! always give the same answer, so hosts may call it on every change, on blur
//! and on submit interchangeably.

use std::borrow::Cow;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    ConfigError, FormData, FormErrors, FormRules, Outcome, PasswordPolicy, Rule, RuleContext,
    RuleRegistry,
};

/// Policy knobs for the built-in rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Minimum age in whole years for `isAdult`
    pub min_age: u32,
    /// Policy for `password`
    pub password: PasswordPolicy,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            min_age: 18,
            password: PasswordPolicy::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Validator {
    registry: RuleRegistry,
    options: ValidatorOptions,
    /// Pinned evaluation date; the local date at call time when unset
    today: Option<NaiveDate>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Pin the date `isAdult` measures age against
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Register a custom rule, usable as a bare identifier in rule lists
    pub fn register<F>(&mut self, name: impl Into<String>, evaluator: F) -> Result<(), ConfigError>
    where
        F: Fn(&str, &RuleContext<'_>) -> Outcome + Send + Sync + 'static,
    {
        self.registry.register(name, evaluator)
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Validate one field
    ///
    /// `value` is the field's current value; `form` supplies the live values
    /// of other fields for `matches`. Returns the first failing rule's
    /// message, or `None` when every rule passes.
    ///
    /// Rules are resolved before any of them runs, so a misconfigured rule is
    /// reported no matter what the user typed.
    pub fn validate_field(
        &self,
        field: &str,
        value: &str,
        rules: &[Rule],
        form: &FormData,
    ) -> Result<Option<String>, ConfigError> {
        if let Err(err) = self.resolve(field, rules, form) {
            warn!(field, error = %err, "invalid rule configuration");
            return Err(err);
        }

        let ctx = RuleContext {
            field,
            form,
            today: self.today(),
            options: &self.options,
        };

        for rule in rules {
            match self.registry.evaluate(rule, value, &ctx)? {
                Ok(()) => trace!(field, %rule, "rule passed"),
                Err(message) => {
                    debug!(field, %rule, %message, "rule failed");
                    return Ok(Some(message));
                }
            }
        }

        Ok(None)
    }

    /// Validate one field by name, looking its rule list up in `rules`
    pub fn validate_named(
        &self,
        field: &str,
        value: &str,
        rules: &FormRules,
        form: &FormData,
    ) -> Result<Option<String>, ConfigError> {
        let field_rules = rules
            .get(field)
            .ok_or_else(|| ConfigError::UnknownField(field.to_string()))?;
        self.validate_field(field, value, field_rules, form)
    }

    /// Validate every field in `rules` against its value in `form`
    ///
    /// Fields missing from `form` are validated as empty strings, also when
    /// they are the target of a `matches` rule. The result holds only failing
    /// fields; the form is submittable iff it is empty.
    pub fn validate_form(&self, form: &FormData, rules: &FormRules) -> Result<FormErrors, ConfigError> {
        let filled = if rules.fields().all(|field| form.contains(field)) {
            Cow::Borrowed(form)
        } else {
            let mut filled = form.clone();
            for field in rules.fields().filter(|field| !form.contains(field)) {
                filled.set(field, "");
            }
            Cow::Owned(filled)
        };
        let form: &FormData = &filled;

        let mut errors = FormErrors::new();

        for (field, field_rules) in rules.iter() {
            if let Some(message) = self.validate_field(field, form.value(field), field_rules, form)? {
                errors.insert(field, message);
            }
        }

        debug!(
            fields = rules.len(),
            failed = errors.len(),
            "validated form"
        );
        Ok(errors)
    }

    /// Eagerly check a rule set for configuration mistakes
    ///
    /// Every custom rule must be registered, every `matches` target must be
    /// another field of the set, and `minLength` must not exceed `maxLength`.
    pub fn check(&self, rules: &FormRules) -> Result<(), ConfigError> {
        for (field, field_rules) in rules.iter() {
            let mut min = None;
            let mut max = None;

            for rule in field_rules {
                match rule {
                    Rule::Custom(name) if !self.registry.resolves(rule) => {
                        return Err(ConfigError::UnknownRule(name.clone()));
                    }
                    Rule::Matches(target) if target == field => {
                        return Err(ConfigError::SelfMatch(field.to_string()));
                    }
                    Rule::Matches(target) if !rules.contains(target) => {
                        return Err(ConfigError::UnknownMatchTarget {
                            field: field.to_string(),
                            target: target.clone(),
                        });
                    }
                    Rule::MinLength(n) => min = Some(*n),
                    Rule::MaxLength(n) => max = Some(*n),
                    _ => {}
                }
            }

            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(ConfigError::ConflictingLengthBounds {
                        field: field.to_string(),
                        min,
                        max,
                    });
                }
            }
        }

        Ok(())
    }

    fn resolve(&self, field: &str, rules: &[Rule], form: &FormData) -> Result<(), ConfigError> {
        for rule in rules {
            match rule {
                Rule::Custom(name) if !self.registry.resolves(rule) => {
                    return Err(ConfigError::UnknownRule(name.clone()));
                }
                Rule::Matches(target) if !form.contains(target) => {
                    return Err(ConfigError::UnknownMatchTarget {
                        field: field.to_string(),
                        target: target.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Validate one field with the default validator
pub fn validate_field(
    field: &str,
    value: &str,
    rules: &[Rule],
    form: &FormData,
) -> Result<Option<String>, ConfigError> {
    Validator::default().validate_field(field, value, rules, form)
}

/// Validate a whole form with the default validator
pub fn validate_form(form: &FormData, rules: &FormRules) -> Result<FormErrors, ConfigError> {
    Validator::default().validate_form(form, rules)
}
