// Interactive registration: each answer is validated when the prompt is left
// (blur), dependent fields are re-checked when a value they compare against
// changes, and submission re-validates the whole form.

use crate::config::Config;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use indexmap::IndexMap;
use register_validation::{FormData, FormRules, Validator};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub fn execute(config: &Config) -> Result<()> {
    let validator = config.validator()?;

    println!("{}", "Register".bold());
    println!();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&validator, &config.rules);
    session.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

pub struct Session<'a> {
    validator: &'a Validator,
    rules: &'a FormRules,
    form: FormData,
    /// Last shown error per field; `None` once the field is valid
    errors: IndexMap<String, Option<String>>,
}

impl<'a> Session<'a> {
    pub fn new(validator: &'a Validator, rules: &'a FormRules) -> Self {
        let form = rules.fields().map(|field| (field, "")).collect();
        Self {
            validator,
            rules,
            form,
            errors: IndexMap::new(),
        }
    }

    /// Prompt until the form passes the submit gate; returns the submitted data
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<FormData> {
        let mut pending: Vec<String> = self.rules.fields().map(String::from).collect();

        loop {
            for field in &pending {
                self.prompt_field(field, input, out)?;
            }

            let errors = self.validator.validate_form(&self.form, self.rules)?;
            if errors.is_submittable() {
                info!(fields = self.form.len(), "Form submitted successfully");
                writeln!(out, "{}", "Form submitted successfully".green().bold())?;
                return Ok(self.form.clone());
            }

            let failed: Vec<_> = errors.fields().collect();
            warn!(?failed, "Form has errors");
            writeln!(out, "{}", "Please fix the highlighted fields".yellow())?;
            pending = failed.into_iter().map(String::from).collect();
        }
    }

    /// Read values for `field` until it passes its rules
    fn prompt_field(&mut self, field: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        loop {
            write!(out, "{}: ", field.bold())?;
            out.flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read input")?;
            if read == 0 {
                bail!("Input closed before the form was submitted");
            }
            let value = line.trim_end_matches(['\r', '\n']);

            if self.change(field, value, out)?.is_none() {
                return Ok(());
            }
        }
    }

    /// Apply a new value, then validate the field and every field that
    /// compares against it
    fn change(&mut self, field: &str, value: &str, out: &mut impl Write) -> Result<Option<String>> {
        self.form.set(field, value);
        let error = self.blur(field, out)?;

        let rules = self.rules;
        for dependent in rules.dependents(field) {
            // only fields the user has already visited show errors
            if self.errors.contains_key(dependent) {
                debug!(field, dependent, "re-validating dependent field");
                self.blur(dependent, out)?;
            }
        }

        Ok(error)
    }

    fn blur(&mut self, field: &str, out: &mut impl Write) -> Result<Option<String>> {
        let error = self.validator.validate_named(
            field,
            self.form.value(field),
            self.rules,
            &self.form,
        )?;

        match &error {
            Some(message) => writeln!(out, "  {} {}", "✗".red(), message.red())?,
            None if matches!(self.errors.get(field), Some(Some(_))) => {
                writeln!(out, "  {} {}", "✓".green(), field)?
            }
            None => {}
        }

        self.errors.insert(field.to_string(), error.clone());
        Ok(error)
    }
}
