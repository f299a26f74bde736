//! CLI command implementations

pub mod export;
pub mod tool_name;
