//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for exporting task conversation histories as markdown
#[derive(Parser, Debug)]
#[command(name = "taskmd")]
#[command(version)]
#[command(about = "Export task conversation histories as markdown transcripts")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a conversation history file to a markdown transcript
    Export {
        /// Path to the conversation history JSON file
        history: PathBuf,

        /// Only render the content block with this id
        #[arg(long)]
        block_id: Option<String>,

        /// Directory to write the markdown file into
        #[arg(short, long, default_value = ".", env = "TASKMD_OUTPUT_DIR")]
        output: PathBuf,

        /// Print the markdown to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Look up the name of the tool that issued a call id
    ToolName {
        /// Path to the conversation history JSON file
        history: PathBuf,

        /// Tool call id to resolve
        tool_use_id: String,
    },
}
