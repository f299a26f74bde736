//! taskmd-core - Data model and markdown rendering for task conversation histories
//!
//! This crate provides the types for representing a stored task conversation
//! (role-tagged messages holding text, tool calls, tool results and reasoning),
//! along with utilities for locating individual content blocks and rendering
//! the conversation as a markdown transcript.

pub mod export;
pub mod filter;
pub mod parser;
pub mod render;
pub mod types;

pub use export::*;
pub use filter::*;
pub use parser::*;
pub use render::*;
pub use types::*;
