//! Gridax CLI
//!
//! Command-line driver for the grid datum extent tools. Operates on a
//! JSON document file standing in for the host document.

use clap::{Parser, Subcommand};
use gridax_core::logging_facility::{init, Profile};

mod commands;
mod docfile;

#[derive(Debug, Parser)]
#[command(name = "gridax")]
#[command(about = "Gridax - grid datum extent tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a sample document file
    Seed(commands::seed::SeedArgs),
    /// Print grid extent modes for a view
    Show(commands::show::ShowArgs),
    /// Toggle grid extent modes in a view
    Toggle(commands::toggle::ToggleArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Toggle(args) => commands::toggle::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
