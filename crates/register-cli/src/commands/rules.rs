use crate::config::Config;
use anyhow::{Context, Result};

pub fn execute(config: &Config) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

/// The effective configuration as register.toml content
fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to render configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_config_loads_back() {
        let config = Config::default();
        let rendered = render(&config).unwrap();

        assert!(rendered.contains("[rules]"));
        let reloaded: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(reloaded.rules, config.rules);
        assert_eq!(reloaded.validator, config.validator);
    }
}
