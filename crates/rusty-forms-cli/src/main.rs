mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-forms")]
#[command(version, about = "rusty-forms CLI - validate form layouts and submitted values", long_about = None)]
struct Cli {
    /// Show debug logging (rule failures, queue activity)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate submitted values against a form layout
    Check {
        /// JSON form layout
        #[arg(short, long)]
        layout: PathBuf,

        /// JSON object of field name -> value (string, or bool for checkboxes)
        #[arg(long)]
        values: Option<PathBuf>,

        /// Configuration file (defaults to ./rusty-forms.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available validation rules and their messages
    Rules {
        /// Configuration file with message overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored per-field report
    Text,
    /// Aggregate verdict as JSON
    Json,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            layout,
            values,
            config,
            format,
        } => {
            let valid = commands::check::execute(&layout, values.as_deref(), config.as_deref(), format)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Rules { config } => {
            commands::rules::execute(config.as_deref())?;
        }
    }

    Ok(())
}
