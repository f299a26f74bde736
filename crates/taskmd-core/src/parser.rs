//! Conversation history file parsing
//!
//! Stored task histories are JSON arrays of messages
//! (`api_conversation_history.json`).

use std::path::Path;
use thiserror::Error;

use crate::types::Message;

/// History parsing errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a conversation history from JSON text
pub fn parse_history(json: &str) -> Result<Vec<Message>, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a conversation history file
pub fn parse_history_file<P: AsRef<Path>>(path: P) -> Result<Vec<Message>, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_history(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentBlock, MessageContent, Role};

    #[test]
    fn test_parse_history() {
        let json = r#"[
            {"role":"user","content":"Hello"},
            {"role":"assistant","content":[{"type":"text","text":"Hi there!"}]}
        ]"#;

        let history = parse_history(json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        match &history[1].content {
            MessageContent::Blocks(blocks) => {
                assert!(matches!(&blocks[0], ContentBlock::Text { text } if text == "Hi there!"));
            }
            _ => panic!("Expected block content"),
        }
    }

    #[test]
    fn test_parse_history_rejects_malformed_input() {
        let err = parse_history("{\"not\":\"an array\"}").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
