pub mod field;
pub mod fill;
pub mod rules;
pub mod validate;

use anyhow::{Context, Result};
use colored::Colorize;
use register_validation::{FormData, FormErrors, FormRules};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read a JSON form snapshot (object of string values)
pub fn read_form(path: &Path) -> Result<FormData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse form file: {:?}", path))
}

/// One status line per configured field, in declaration order
pub fn print_report(out: &mut impl Write, rules: &FormRules, errors: &FormErrors) -> Result<()> {
    for field in rules.fields() {
        match errors.get(field) {
            Some(message) => writeln!(out, "  {} {}: {}", "✗".red(), field.bold(), message.red())?,
            None => writeln!(out, "  {} {}", "✓".green(), field)?,
        }
    }
    Ok(())
}
