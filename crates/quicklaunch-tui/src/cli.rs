//! CLI argument parsing for quicklaunch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quicklaunch")]
#[command(about = "Keyboard-driven application launcher for the terminal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging (logs to the cache directory)
    #[arg(short, long)]
    pub debug: bool,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Items per page, overriding the config file
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive palette (default)
    Tui,

    /// Print every application in the catalog
    List,

    /// Print the first page of matches for a query
    Query {
        /// Filter text
        text: String,
    },
}
