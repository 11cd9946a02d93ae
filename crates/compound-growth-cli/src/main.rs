mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::growth::{CompareArgs, DoubleArgs, LatteArgs, SimulateArgs};
use commands::sweep::SweepArgs;

/// Explore how money grows under annual compounding
#[derive(Parser)]
#[command(
    name = "growth",
    version,
    about = "Explore how money grows under annual compounding",
    long_about = "Simulates year-by-year growth of a starting amount plus monthly \
                  contributions under annual compounding, with decimal precision. \
                  Also estimates doubling time, compares two scenarios and projects \
                  small daily habits."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate year-by-year growth of one scenario
    Simulate(SimulateArgs),
    /// Estimate years to double with the rule of 72
    Double(DoubleArgs),
    /// Compare two scenarios side by side
    Compare(CompareArgs),
    /// Project what a daily habit would grow to if invested
    Latte(LatteArgs),
    /// Re-run the simulation over a grid of one or two inputs
    Sweep(SweepArgs),
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
    logging::init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::growth::run_simulate(args),
        Commands::Double(args) => commands::growth::run_double(args),
        Commands::Compare(args) => commands::growth::run_compare(args),
        Commands::Latte(args) => commands::growth::run_latte(args),
        Commands::Sweep(args) => commands::sweep::run_sweep(args),
        Commands::Version => {
            println!("growth {}", env!("CARGO_PKG_VERSION"));
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
