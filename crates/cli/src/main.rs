mod chart;
mod cli;
mod error;
mod fetch;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Gdp { output_path } => chart::gdp(output_path),
        Commands::Cycling { output_path } => chart::cycling(output_path),
    };

    // A failed fetch means the chart is simply not produced: the error
    // is reported and no partial document is written.
    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}
