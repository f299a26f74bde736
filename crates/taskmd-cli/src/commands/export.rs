//! Export command - render a history file as a markdown transcript

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use taskmd_core::{
    build_conversation_markdown, parse_history_file, task_file_name, MarkdownOptions,
};

pub fn run(
    history_path: &Path,
    block_id: Option<&str>,
    output_dir: &Path,
    to_stdout: bool,
) -> Result<()> {
    let history = parse_history_file(history_path)
        .with_context(|| format!("Failed to read history file {}", history_path.display()))?;

    let mut options = MarkdownOptions::new();
    if let Some(id) = block_id {
        options = options.with_block_id(id);
    }

    let markdown = build_conversation_markdown(&history, &options)?;

    if to_stdout {
        print!("{}", markdown);
        return Ok(());
    }

    let path = output_dir.join(task_file_name(Local::now().naive_local()));
    std::fs::write(&path, &markdown)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", path.display());

    Ok(())
}
