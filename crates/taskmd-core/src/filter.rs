//! Content block lookup within a conversation history

use thiserror::Error;

use crate::types::{ContentBlock, Message, MessageContent};

/// Block lookup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("No content block found for id {0}")]
    BlockNotFound(String),
}

/// Narrow a conversation history to the single content block with the given id.
///
/// Messages are scanned newest-first, so if an id were ever reused the latest
/// occurrence wins. Tool call blocks match on `id`, tool result blocks on
/// `tool_use_id`. The matched block is returned re-wrapped in a copy of its
/// owning message, with all sibling blocks discarded.
pub fn filter_by_block_id(history: &[Message], block_id: &str) -> Result<Vec<Message>, LookupError> {
    for message in history.iter().rev() {
        // Plain-string content cannot contain a matchable block
        if let MessageContent::Blocks(blocks) = &message.content {
            if let Some(block) = blocks.iter().find(|block| matches_block_id(block, block_id)) {
                return Ok(vec![Message {
                    role: message.role,
                    content: MessageContent::Blocks(vec![block.clone()]),
                }]);
            }
        }
    }

    Err(LookupError::BlockNotFound(block_id.to_string()))
}

fn matches_block_id(block: &ContentBlock, block_id: &str) -> bool {
    match block {
        ContentBlock::ToolUse { id, .. } => id == block_id,
        ContentBlock::ToolResult { tool_use_id, .. } => tool_use_id == block_id,
        _ => false,
    }
}

/// Find the name of the tool that issued the given call id
pub fn find_tool_name(tool_call_id: &str, messages: &[Message]) -> String {
    for message in messages {
        if let MessageContent::Blocks(blocks) = &message.content {
            for block in blocks {
                if let ContentBlock::ToolUse { id, name, .. } = block {
                    if id == tool_call_id {
                        return name.clone();
                    }
                }
            }
        }
    }
    "Unknown Tool".to_string()
}
