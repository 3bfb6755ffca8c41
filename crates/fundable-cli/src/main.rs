mod commands;
mod config;
mod input;
mod output;
mod store;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::funding::FundingArgs;
use commands::import::ImportArgs;
use commands::list::ListArgs;
use config::{ConfigError, FundableConfig};
use telemetry::LogFilter;

/// Company funding calculations from EDGAR net income
#[derive(Parser)]
#[command(
    name = "fundable",
    version,
    about = "Company funding calculations from EDGAR net income",
    long_about = "Imports annual net income from SEC EDGAR company-facts documents and \
                  computes each company's standard and special fundable amounts with \
                  decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// YAML configuration file (defaults to ./fundable.yaml when present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log filter, e.g. `info` or `fundable_core=debug` (overrides RUST_LOG and the config file)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the fundable amounts for one company
    Funding(FundingArgs),
    /// Import company-facts documents into the local dataset
    Import(ImportArgs),
    /// List imported companies with their fundable amounts
    List(ListArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let config = match command_config(&cli.command, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let filter = LogFilter::from_environment(
        cli.log_level.as_deref(),
        config.as_ref().map(|c| c.log_level.as_str()),
    );
    if let Err(e) = telemetry::init(&filter) {
        fail(e);
    }

    match run_command(cli.command, config) {
        Ok(Some(value)) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Ok(None) => {}
        Err(e) => fail(e),
    }
}

/// `funding` and `version` never read the config file.
fn command_config(
    command: &Commands,
    path: Option<&str>,
) -> Result<Option<FundableConfig>, ConfigError> {
    match command {
        Commands::Import(_) | Commands::List(_) => FundableConfig::load(path).map(Some),
        Commands::Funding(_) | Commands::Version => Ok(None),
    }
}

fn run_command(
    command: Commands,
    config: Option<FundableConfig>,
) -> Result<Option<serde_json::Value>, Box<dyn std::error::Error>> {
    let config = config.unwrap_or_default();
    let value = match command {
        Commands::Funding(args) => commands::funding::run_funding(args)?,
        Commands::Import(args) => commands::import::run_import(args, &config)?,
        Commands::List(args) => commands::list::run_list(args, &config)?,
        Commands::Version => {
            println!("fundable {}", env!("CARGO_PKG_VERSION"));
            return Ok(None);
        }
    };
    Ok(Some(value))
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".red().bold(), e);
    process::exit(1);
}
