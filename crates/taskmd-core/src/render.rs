//! Markdown transcript rendering

use crate::filter::{filter_by_block_id, LookupError};
use crate::types::{ContentBlock, Message, MessageContent, Role, ToolInput, ToolResultContent};

/// Options for building a markdown transcript
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Only render the content block with this id
    pub block_id: Option<String>,
}

impl MarkdownOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

/// Build a markdown transcript from a conversation history.
///
/// When `options.block_id` is set, only the matching content block is rendered
/// (tool call blocks match on `id`, tool result blocks on `tool_use_id`);
/// an unknown id yields [`LookupError::BlockNotFound`].
pub fn build_conversation_markdown(
    history: &[Message],
    options: &MarkdownOptions,
) -> Result<String, LookupError> {
    if let Some(block_id) = &options.block_id {
        let filtered = filter_by_block_id(history, block_id)?;
        return build_conversation_markdown(&filtered, &MarkdownOptions::default());
    }

    let fragments: Vec<String> = history.iter().map(render_message).collect();
    Ok(fragments.join("---\n\n"))
}

fn render_message(message: &Message) -> String {
    let role = match message.role {
        Role::User => "**User:**",
        Role::Assistant => "**Assistant:**",
    };
    let body = match &message.content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => blocks
            .iter()
            .map(format_content_block_to_markdown)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    format!("{}\n\n{}\n\n", role, body)
}

/// Render a single content block as markdown. Total over all block kinds:
/// unrecognized kinds render a placeholder naming the tag instead of failing.
pub fn format_content_block_to_markdown(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Text { text } => text.clone(),
        ContentBlock::Image => "[Image]".to_string(),
        ContentBlock::ToolUse { name, input, .. } => {
            format!("[Tool Use: {}]\n{}", name, render_tool_input(input))
        }
        ContentBlock::ToolResult {
            content, is_error, ..
        } => {
            let header = if *is_error { "[Tool (Error)]" } else { "[Tool]" };
            match content {
                Some(ToolResultContent::Text(text)) => format!("{}\n{}", header, text),
                Some(ToolResultContent::Blocks(blocks)) => {
                    let rendered: Vec<String> = blocks
                        .iter()
                        .map(format_content_block_to_markdown)
                        .collect();
                    format!("{}\n{}", header, rendered.join("\n"))
                }
                None => header.to_string(),
            }
        }
        ContentBlock::Reasoning { text } => format!("[Reasoning]\n{}", text),
        ContentBlock::Unknown { kind } => format!("[Unexpected content type: {}]", kind),
    }
}

fn render_tool_input(input: &ToolInput) -> String {
    match input {
        ToolInput::Structured(map) => map
            .iter()
            .map(|(key, value)| format!("{}: {}", capitalize(key), render_input_value(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        ToolInput::Scalar(value) => plain_value(value),
    }
}

/// Structured values get an indented JSON dump, scalars their plain form
fn render_input_value(value: &serde_json::Value) -> String {
    if value.is_object() || value.is_array() {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    } else {
        plain_value(value)
    }
}

/// Plain form of a JSON scalar: string payload unquoted, others as JSON text
fn plain_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Upper-case the first character of a key, leaving the rest unchanged
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
