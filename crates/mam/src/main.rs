//! MAM CLI - MAM-XML to Sefaria converter.
//!
//! Provides commands for:
//! - `convert`: Render MAM-XML book groups and write the configured formats
//! - `books`: List the 39 books with their codes

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BooksArgs, ConvertArgs};
use output::Output;

/// MAM - MAM-XML to Sefaria converter.
#[derive(Parser)]
#[command(name = "mam", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert books to the configured output formats.
    Convert(ConvertArgs),
    /// List the books with their codes.
    Books(BooksArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Convert(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Books(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
