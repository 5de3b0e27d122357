//! Request/response envelopes for the chat-completion exchange
//!
//! Both sides of the loop speak these shapes; the HTTP binding in
//! [`crate::server`] and [`crate::endpoint::HttpEndpoint`] carry them as JSON
//! verbatim. Every request field has a serde default, so a malformed or
//! partial request never fails to deserialize; missing fields fall back to
//! empty values and the responder decides from whatever is there.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::message::ChatMessage;
use crate::types::tool::{ToolChoice, ToolSpec};

fn default_model() -> String {
    "unspecified".to_string()
}

/// One conversational turn's request. Built fresh per round, immutable once
/// sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
    #[serde(default)]
    pub tool_choice: ToolChoice,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            tools: Vec::new(),
            tool_choice: ToolChoice::default(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    /// Check the structural invariants of the message sequence.
    ///
    /// The responder never calls this (it is deliberately lenient); the
    /// orchestrator uses it to catch its own assembly mistakes before they
    /// cross the wire.
    pub fn validate(&self) -> crate::Result<()> {
        for (i, msg) in self.messages.iter().enumerate() {
            if !msg.is_well_formed() {
                return Err(crate::Error::protocol_violation(format!(
                    "messages[{i}]: tool-role message missing tool_name or content"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            model: default_model(),
            messages: Vec::new(),
            tools: Vec::new(),
            tool_choice: ToolChoice::default(),
        }
    }
}

/// The single result carried by a response.
///
/// Exactly one variant per response is a structural property of the sum
/// type, not a runtime check — a response cannot hold both a direct answer
/// and an invocation request, nor neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// Plain assistant text, terminal for the conversation path.
    DirectAnswer { text: String },
    /// "Call this tool with these arguments." `arguments` is an opaque
    /// string; the server makes no guarantee it is well-formed or safe, and
    /// the client must parse and validate it before acting.
    ToolInvocation { name: String, arguments: String },
}

/// Token counters. Always zero in this simulation; carried for envelope
/// fidelity only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// One conversational turn's response. Discarded after use; no state
/// persists between turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub created: u64,
    pub model: String,
    pub result: ResponsePayload,
    #[serde(default)]
    pub usage: Usage,
}

impl ChatResponse {
    /// Wrap a payload in a fresh envelope (new id, current timestamp).
    pub fn envelope(model: impl Into<String>, result: ResponsePayload) -> Self {
        let created = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            id: format!("chatcmpl-{}", uuid::Uuid::new_v4()),
            created,
            model: model.into(),
            result,
            usage: Usage::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::message::Role;

    #[test]
    fn request_defaults_cover_missing_fields() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.model, "unspecified");
        assert!(req.messages.is_empty());
        assert!(req.tools.is_empty());
        assert_eq!(req.tool_choice, ToolChoice::Auto);
    }

    #[test]
    fn payload_round_trips_tagged() {
        let inv = ResponsePayload::ToolInvocation {
            name: "use_calculator".into(),
            arguments: "{\"expression\":\"2+2\"}".into(),
        };
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["type"], "tool_invocation");
        let back: ResponsePayload = serde_json::from_value(json).unwrap();
        assert_eq!(back, inv);
    }

    #[test]
    fn envelope_gets_unique_ids() {
        let a = ChatResponse::envelope("m", ResponsePayload::DirectAnswer { text: "x".into() });
        let b = ChatResponse::envelope("m", ResponsePayload::DirectAnswer { text: "x".into() });
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("chatcmpl-"));
    }

    #[test]
    fn validate_flags_bad_tool_message() {
        let req = ChatRequest::new(
            "m",
            vec![ChatMessage {
                role: Role::Tool,
                content: None,
                tool_name: None,
                tool_arguments: None,
            }],
        );
        assert!(matches!(
            req.validate(),
            Err(crate::Error::ProtocolViolation { .. })
        ));
    }
}
