//! TinyDB CLI
//!
//! Command-line access to a TinyDB persistence file.
//!
//! # Commands
//!
//! - `insert` - Insert a JSON object into a collection
//! - `find` - Print documents of a collection, optionally filtered
//! - `collections` - List collection names in creation order

mod commands;
mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// TinyDB command-line tool.
#[derive(Parser, Debug)]
#[command(name = "tinydb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the database file
    #[arg(global = true, short, long)]
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert a document and print its id
    Insert {
        /// Collection name
        collection: String,

        /// Document fields as a JSON object
        data: String,
    },

    /// Print matching documents as a JSON array
    Find {
        /// Collection name
        collection: String,

        /// Exact-match filter as a JSON object
        #[arg(short = 'w', long = "where")]
        filter: Option<String>,
    },

    /// List collection names
    Collections,
}

fn run(cli: Cli, out: &mut impl io::Write) -> Result<(), Box<dyn std::error::Error>> {
    let path = cli.file.ok_or("database file required (--file <PATH>)")?;

    let result: Result<(), CliError> = match cli.command {
        Commands::Insert { collection, data } => {
            commands::insert::run(&path, &collection, &data, out)
        }
        Commands::Find { collection, filter } => {
            commands::find::run(&path, &collection, filter.as_deref(), out)
        }
        Commands::Collections => commands::collections::run(&path, out),
    };

    Ok(result?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
