use super::{print_report, read_form};
use crate::config::Config;
use anyhow::{bail, Result};
use colored::Colorize;
use register_validation::{FormData, FormErrors, FormRules, Validator};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn execute(config: &Config, form_path: &Path, json: bool) -> Result<()> {
    let form = read_form(form_path)?;
    let validator = config.validator()?;

    let stdout = io::stdout();
    let errors = run(&validator, &config.rules, &form, json, &mut stdout.lock())?;

    if errors.has_errors() {
        bail!("Form has {} invalid field(s)", errors.len());
    }
    Ok(())
}

/// Submit gate over one snapshot; writes the report and returns the errors
pub fn run(
    validator: &Validator,
    rules: &FormRules,
    form: &FormData,
    json: bool,
    out: &mut impl Write,
) -> Result<FormErrors> {
    let errors = validator.validate_form(form, rules)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
    } else {
        writeln!(out, "{}", "Validating form...".bold())?;
        print_report(out, rules, &errors)?;
    }

    if errors.is_submittable() {
        info!(fields = form.len(), "Form submitted successfully");
    } else {
        let failed: Vec<_> = errors.fields().collect();
        warn!(?failed, "Form has errors");
    }

    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn validator() -> Validator {
        Validator::new().with_today(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    fn form() -> FormData {
        FormData::from([
            ("name", "Al"),
            ("email", "al@x.com"),
            ("phone", "5551234567"),
            ("dob", "2000-01-01"),
            ("password", "Abcdef1!"),
            ("confirmPassword", "Abcdef1!"),
        ])
    }

    #[test]
    fn test_valid_form_json_output_is_empty_object() {
        let mut out = Vec::new();
        let errors = run(&validator(), &FormRules::registration(), &form(), true, &mut out).unwrap();

        assert!(errors.is_submittable());
        assert_eq!(String::from_utf8(out).unwrap().trim(), "{}");
    }

    #[test]
    fn test_mismatch_json_output() {
        let mut out = Vec::new();
        let form = form().with("confirmPassword", "mismatch");
        run(&validator(), &FormRules::registration(), &form, true, &mut out).unwrap();

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            printed,
            serde_json::json!({ "confirmPassword": "Does not match password" })
        );
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        let form = form().with("email", "nope");
        let errors = run(&validator(), &FormRules::registration(), &form, false, &mut out).unwrap();

        assert_eq!(errors.len(), 1);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Invalid email address"));
    }
}
