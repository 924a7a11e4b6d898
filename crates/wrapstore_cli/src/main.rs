//! WrapStore CLI
//!
//! Command-line access to a WrapStore facade.
//!
//! # Commands
//!
//! - `get` / `set` / `remove` / `clear` - Data operations through the facade
//! - `keys` / `len` - Enumerate the side currently serving
//! - `probe` - Report whether the persistent store is usable right now
//!
//! Without `--dir` or `--file` there is no host, and every command runs
//! against a fresh in-memory store.

mod commands;

use clap::{Parser, Subcommand};
use commands::StoreOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// WrapStore command-line storage tools.
#[derive(Parser)]
#[command(name = "wrapstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host data directory holding the primary and session stores
    #[arg(global = true, short, long, conflicts_with = "file")]
    dir: Option<PathBuf>,

    /// Single store document to wrap
    #[arg(global = true, short, long)]
    file: Option<PathBuf>,

    /// Use the session store instead of the primary store
    #[arg(global = true, short, long, requires = "dir")]
    session: bool,

    /// Byte quota for the persistent store (needs --dir or --file)
    #[arg(global = true, short, long)]
    quota: Option<u64>,

    /// Open the persistent store disabled (needs --dir or --file)
    #[arg(global = true, long)]
    disabled: bool,

    /// Output format (text, json)
    #[arg(global = true, long, default_value = "text")]
    format: String,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value stored under a key
    Get {
        /// Key to read
        key: String,
    },

    /// Store a value under a key
    Set {
        /// Key to write
        key: String,
        /// Value to store
        value: String,
    },

    /// Remove a key
    Remove {
        /// Key to remove
        key: String,
    },

    /// Remove every entry
    Clear,

    /// List keys in enumeration order
    Keys,

    /// Print the number of entries
    Len,

    /// Check whether the persistent store is usable
    Probe,

    /// Show version information
    Version,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Version = cli.command {
        println!("WrapStore CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("WrapStore Core v{}", wrapstore_core::VERSION);
        return Ok(ExitCode::SUCCESS);
    }

    let options = StoreOptions {
        dir: cli.dir,
        file: cli.file,
        session: cli.session,
        quota: cli.quota,
        disabled: cli.disabled,
    };
    let selection = commands::select(&options)?;
    let facade = &selection.facade;

    match cli.command {
        Commands::Get { key } => {
            if !commands::entries::get(facade, &key, &cli.format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Set { key, value } => commands::entries::set(facade, &key, &value),
        Commands::Remove { key } => commands::entries::remove(facade, &key),
        Commands::Clear => commands::entries::clear(facade),
        Commands::Keys => commands::entries::keys(facade, &cli.format)?,
        Commands::Len => commands::entries::length(facade, &cli.format)?,
        Commands::Probe => commands::probe::run(&selection, &cli.format)?,
        Commands::Version => {}
    }

    Ok(ExitCode::SUCCESS)
}
