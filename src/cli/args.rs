//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pouch - local cache for piped command output
///
/// Pipe bytes in, get an id back, retrieve them later by that id.
#[derive(Parser, Debug)]
#[command(name = "pouch")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Cache root directory (defaults to the platform cache dir)
    #[arg(long, global = true, env = "POUCH_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "POUCH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cache piped stdin under a fresh id
    Save(SaveArgs),

    /// Print a cached payload by id
    Get(GetArgs),

    /// List cached entries
    List(ListArgs),

    /// Remove one entry, or everything
    Clear(ClearArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the save command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Label describing the payload (detected from the pipe writer if omitted)
    #[arg(short, long)]
    pub label: Option<String>,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Entry id as printed by save
    pub id: String,

    /// Write the payload to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the clear command
#[derive(Parser, Debug)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["id", "all"])))]
pub struct ClearArgs {
    /// Entry id to remove
    pub id: Option<String>,

    /// Remove every entry and reset the cache
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Ids only (one per line)
    Plain,
}
