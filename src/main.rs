//! Pouch - cache piped command output, retrieve it later by id
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use pouch::cli::{Cli, Commands};
use pouch::config::ConfigManager;
use pouch::error::PouchResult;
use pouch::store::CacheManager;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // A miss is expected operation, not a failure; don't shout
            if e.is_not_found() {
                eprintln!("{} {}", style("Error:").yellow().bold(), e);
            } else {
                eprintln!("{} {}", style("Error:").red().bold(), e);
            }
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PouchResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("pouch=warn"),
        1 => EnvFilter::new("pouch=info"),
        _ => EnvFilter::new("pouch=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Completions need no cache or config
    if let Commands::Completions(args) = cli.command {
        return pouch::cli::commands::completions(args);
    }

    // Load configuration
    let config_manager = if let Some(path) = cli.config {
        ConfigManager::with_path(path)
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    // Root precedence: --root flag, then config, then platform default
    let root = cli
        .root
        .or_else(|| config.cache.root.clone())
        .unwrap_or_else(CacheManager::default_root);
    debug!("Using cache root {}", root.display());

    let manager = CacheManager::open(root).await?;

    // Dispatch to command
    match cli.command {
        Commands::Completions(_) => unreachable!("Completions handled above"),
        Commands::Save(args) => pouch::cli::commands::save(args, &manager, &config).await,
        Commands::Get(args) => pouch::cli::commands::get(args, &manager).await,
        Commands::List(args) => pouch::cli::commands::list(args, &manager, &config).await,
        Commands::Clear(args) => pouch::cli::commands::clear(args, &manager).await,
    }
}
