// src/cli/mod.rs
use std::path::PathBuf;
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and keep them by login", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// SQLite database file
    #[arg(long, short, env = "PASSKEEPER_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
