//! Core type definitions (messages, tools)

pub mod message;
pub mod tool;

pub use message::{ChatMessage, Role};
pub use tool::{ToolChoice, ToolSpec};
