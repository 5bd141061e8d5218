use super::read_form;
use crate::config::Config;
use anyhow::{bail, Result};
use colored::Colorize;
use register_validation::{FormData, Rule, Validator};
use std::path::Path;

pub fn execute(
    config: &Config,
    name: &str,
    value: &str,
    form_path: Option<&Path>,
    rules: &[Rule],
) -> Result<()> {
    let form = match form_path {
        Some(path) => read_form(path)?,
        None => FormData::new(),
    };
    let validator = config.validator()?;

    match check(&validator, config, name, value, form, rules)? {
        None => {
            println!("{} {}", "✓".green(), name);
            Ok(())
        }
        Some(message) => {
            println!("{} {}: {}", "✗".red(), name.bold(), message.red());
            bail!("{} is invalid", name);
        }
    }
}

/// Validate `value` as the current value of `name`
///
/// `rules` overrides the configured rule list when non-empty.
fn check(
    validator: &Validator,
    config: &Config,
    name: &str,
    value: &str,
    mut form: FormData,
    rules: &[Rule],
) -> Result<Option<String>> {
    form.set(name, value);

    let error = if rules.is_empty() {
        validator.validate_named(name, value, &config.rules, &form)?
    } else {
        validator.validate_field(name, value, rules, &form)?
    };
    Ok(error)
}
