mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use register_validation::Rule;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "register")]
#[command(version, about = "Registration form validator", long_about = None)]
struct Cli {
    /// Configuration file (rules, validator options, logging)
    #[arg(short, long, global = true, default_value = "register.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON form snapshot (the submit gate)
    Validate {
        /// JSON object of field name to string value
        form: PathBuf,

        /// Print errors as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Validate a single field value
    Field {
        /// Field name
        name: String,

        /// Current value of the field
        value: String,

        /// JSON snapshot supplying the other fields (for `matches`)
        #[arg(short, long)]
        form: Option<PathBuf>,

        /// Rule to apply instead of the configured ones, e.g. `minLength(2)` (repeatable)
        #[arg(short, long = "rule")]
        rules: Vec<Rule>,
    },

    /// Print the effective configuration, including the rule set
    Rules,

    /// Fill in the form interactively
    Fill,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    init_tracing(&config.log.level);

    // Execute command
    match cli.command {
        Commands::Validate { form, json } => {
            commands::validate::execute(&config, &form, json)?;
        }
        Commands::Field {
            name,
            value,
            form,
            rules,
        } => {
            commands::field::execute(&config, &name, &value, form.as_deref(), &rules)?;
        }
        Commands::Rules => {
            commands::rules::execute(&config)?;
        }
        Commands::Fill => {
            commands::fill::execute(&config)?;
        }
    }

    Ok(())
}
