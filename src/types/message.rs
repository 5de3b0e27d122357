//! Chat message format shared by both parties of the exchange

use serde::{Deserialize, Serialize};

/// A single entry in a conversation's message sequence.
///
/// Which optional fields are present depends on the role:
/// - `role = tool` carries `tool_name` plus `content` (the tool's result),
/// - an assistant message recording a requested invocation carries
///   `tool_name` plus `tool_arguments` instead of `content`,
/// - everything else is plain `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_arguments: Option<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(text.into()),
            tool_name: None,
            tool_arguments: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(text.into()),
            tool_name: None,
            tool_arguments: None,
        }
    }

    /// Assistant message recording the invocation the responder asked for.
    pub fn tool_call(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: None,
            tool_name: Some(name.into()),
            tool_arguments: Some(arguments.into()),
        }
    }

    /// Tool-role message carrying an executed tool's result.
    pub fn tool_result(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_name: Some(name.into()),
            tool_arguments: None,
        }
    }

    /// A tool-role message must name its tool and carry a result payload.
    pub fn is_well_formed(&self) -> bool {
        match self.role {
            Role::Tool => self.tool_name.is_some() && self.content.is_some(),
            _ => true,
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Tool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_result_is_well_formed() {
        let msg = ChatMessage::tool_result("use_calculator", "{\"result\":4}");
        assert_eq!(msg.role, Role::Tool);
        assert!(msg.is_well_formed());
    }

    #[test]
    fn bare_tool_role_is_rejected() {
        let msg = ChatMessage {
            role: Role::Tool,
            content: None,
            tool_name: None,
            tool_arguments: None,
        };
        assert!(!msg.is_well_formed());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&Role::Tool).unwrap();
        assert_eq!(json, "\"tool\"");
    }
}
