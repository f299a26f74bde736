//! taskmd - export task conversation histories as markdown transcripts

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Export {
            history,
            block_id,
            output,
            stdout,
        } => commands::export::run(history, block_id.as_deref(), output, *stdout),

        Command::ToolName {
            history,
            tool_use_id,
        } => commands::tool_name::run(history, tool_use_id),
    }
}
