//! Completions command - emit shell completion scripts

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::PouchResult;
use clap::CommandFactory;
use clap_complete::generate;

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> PouchResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "pouch", &mut std::io::stdout());
    Ok(())
}
