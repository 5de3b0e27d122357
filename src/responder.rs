//! Stateless responder implementing the 3-state decision protocol
//!
//! The responder holds no conversation state; each decision is a pure
//! function of the incoming request's message history and declared tools.
//! Precedence is strict and ordered:
//!
//! 1. **Echo tool result**: a tool-role message is present. Answer with its
//!    content verbatim, no interpretation.
//! 2. **Request tool invocation**: no tool-role message, but tools are
//!    declared. Ask for the first declared tool with a fixed, server-chosen
//!    argument payload.
//! 3. **Direct reply**: no tools declared. Canned answer.
//!
//! The fixed payload in state 2 is configuration, not derived from the user
//! message, and from the client's point of view it is untrusted text that
//! may contain anything. That asymmetry is the point of the simulation: it
//! exercises the orchestrator's trust boundary.

use async_trait::async_trait;

use crate::endpoint::ChatEndpoint;
use crate::protocol::{ChatRequest, ChatResponse, ResponsePayload};
use crate::types::message::Role;

/// Server-side configuration: the canned reply for state 3 and the argument
/// payload offered in state 2.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    pub canned_reply: String,
    pub tool_arguments: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            canned_reply: "This is a fake response.".to_string(),
            tool_arguments: r#"{"expression":"2+2"}"#.to_string(),
        }
    }
}

impl ResponderConfig {
    pub fn with_canned_reply(mut self, text: impl Into<String>) -> Self {
        self.canned_reply = text.into();
        self
    }

    /// Arbitrary text, deliberately unchecked: the responder may offer
    /// arguments that have nothing to do with the declared tool's schema.
    pub fn with_tool_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.tool_arguments = arguments.into();
        self
    }
}

/// Maps a [`ChatRequest`] deterministically to exactly one [`ChatResponse`].
#[derive(Debug, Clone, Default)]
pub struct ResponderEngine {
    config: ResponderConfig,
}

impl ResponderEngine {
    pub fn new(config: ResponderConfig) -> Self {
        Self { config }
    }

    /// The decision function. No error path: missing request fields have
    /// already fallen back to serde defaults, and every request shape maps
    /// to one of the three payloads.
    pub fn respond(&self, request: &ChatRequest) -> ChatResponse {
        let payload = self.decide(request);
        ChatResponse::envelope(request.model.clone(), payload)
    }

    fn decide(&self, request: &ChatRequest) -> ResponsePayload {
        // State 1: a tool already ran; echo its result verbatim.
        if let Some(tool_msg) = request.messages.iter().find(|m| m.role == Role::Tool) {
            tracing::debug!(tool = ?tool_msg.tool_name, "echoing tool result");
            return ResponsePayload::DirectAnswer {
                text: tool_msg.content.clone().unwrap_or_default(),
            };
        }

        // State 2: tools on offer; always ask for the first one, with the
        // configured payload regardless of what the user actually said.
        if let Some(first) = request.tools.first() {
            tracing::debug!(tool = %first.name, "requesting tool invocation");
            return ResponsePayload::ToolInvocation {
                name: first.name.clone(),
                arguments: self.config.tool_arguments.clone(),
            };
        }

        // State 3: nothing to call.
        ResponsePayload::DirectAnswer {
            text: self.config.canned_reply.clone(),
        }
    }
}

#[async_trait]
impl ChatEndpoint for ResponderEngine {
    async fn submit(&self, request: ChatRequest) -> crate::Result<ChatResponse> {
        Ok(self.respond(&request))
    }
}
