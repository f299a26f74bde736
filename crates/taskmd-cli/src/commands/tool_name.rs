//! Tool-name command - resolve a tool call id to the tool that issued it

use anyhow::{Context, Result};
use std::path::Path;

use taskmd_core::{find_tool_name, parse_history_file};

pub fn run(history_path: &Path, tool_use_id: &str) -> Result<()> {
    let history = parse_history_file(history_path)
        .with_context(|| format!("Failed to read history file {}", history_path.display()))?;

    println!("{}", find_tool_name(tool_use_id, &history));

    Ok(())
}
