mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::affordability::AffordabilityArgs;
use commands::amortization::AmortizationArgs;
use commands::comparison::CompareArgs;
use commands::conversion::{MortgageToRentArgs, RentToMortgageArgs};
use commands::rates::RatesArgs;

/// Rent, mortgage and affordability calculations
#[derive(Parser)]
#[command(
    name = "rfe",
    version,
    about = "Rent, mortgage and affordability calculations",
    long_about = "A CLI for real-estate financing calculations with decimal precision. \
                  Supports deposit/rent conversion, amortization schedules, rent vs. \
                  mortgage comparison, affordability analysis and reference market rates."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a mortgage deposit into equivalent monthly rent
    MortgageToRent(MortgageToRentArgs),
    /// Convert a monthly rent into an equivalent mortgage deposit
    RentToMortgage(RentToMortgageArgs),
    /// Build a fixed-rate amortization schedule
    Amortization(AmortizationArgs),
    /// Compare two rent or mortgage options over a horizon
    Compare(CompareArgs),
    /// Estimate borrowing capacity from income and expenses
    Affordability(AffordabilityArgs),
    /// Show reference market rates by city
    Rates(RatesArgs),
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
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::MortgageToRent(args) => commands::conversion::run_mortgage_to_rent(args),
        Commands::RentToMortgage(args) => commands::conversion::run_rent_to_mortgage(args),
        Commands::Amortization(args) => commands::amortization::run_amortization(args),
        Commands::Compare(args) => commands::comparison::run_compare(args),
        Commands::Affordability(args) => commands::affordability::run_affordability(args),
        Commands::Rates(args) => commands::rates::run_rates(args),
        Commands::Version => {
            println!("rfe {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
