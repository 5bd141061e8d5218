// File: src/config.rs
// Purpose: Configuration parsing from register.toml

use anyhow::{Context, Result};
use register_validation::{FormRules, Validator, ValidatorOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    /// Policy knobs for the built-in rules (minimum age, password policy)
    #[serde(default)]
    pub validator: ValidatorOptions,

    /// Field rules; the registration form when omitted
    #[serde(default = "FormRules::registration")]
    pub rules: FormRules,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            validator: ValidatorOptions::default(),
            rules: FormRules::registration(),
        }
    }
}

impl Config {
    /// Load configuration from register.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validator configured with this file's options
    ///
    /// The rule set is checked up front so that a misspelled rule stops the
    /// command instead of surfacing on some later input.
    pub fn validator(&self) -> Result<Validator> {
        let validator = Validator::new().with_options(self.validator.clone());
        validator
            .check(&self.rules)
            .context("Invalid rules in configuration")?;
        Ok(validator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use register_validation::Rule;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.validator.min_age, 18);
        assert_eq!(config.validator.password.min_length, 8);
        assert_eq!(config.rules, FormRules::registration());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("register.toml")).unwrap();
        assert_eq!(config.rules, FormRules::registration());
    }

    #[test]
    fn test_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[log]
level = "debug"

[validator]
min_age = 21

[validator.password]
min_length = 12
require_symbol = false
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.validator.min_age, 21);
        assert_eq!(config.validator.password.min_length, 12);
        assert!(!config.validator.password.require_symbol);
        assert!(config.validator.password.require_digit);
        assert_eq!(config.rules, FormRules::registration());
    }

    #[test]
    fn test_custom_rules() {
        let config: Config = toml::from_str(
            r#"
[rules]
username = ["required", { minLength = 3 }, { maxLength = 20 }]
email = ["required", "email"]
confirmEmail = ["required", { matches = "email" }]
"#,
        )
        .unwrap();

        assert_eq!(config.rules.len(), 3);
        assert_eq!(
            config.rules.get("confirmEmail"),
            Some(&[Rule::Required, Rule::matches("email")][..])
        );
        assert!(config.validator().is_ok());
    }

    #[test]
    fn test_invalid_rules_are_rejected() {
        let config: Config = toml::from_str(
            r#"
[rules]
password = ["pasword"]
"#,
        )
        .unwrap();
        let err = config.validator().unwrap_err();
        assert!(format!("{:#}", err).contains("unknown validation rule 'pasword'"));

        let malformed = toml::from_str::<Config>(
            r#"
[rules]
name = [{ minLength = "two" }]
"#,
        );
        assert!(malformed.is_err());
    }
}
