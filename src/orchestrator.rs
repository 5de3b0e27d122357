//! Client-side driver for the two-round tool-calling conversation
//!
//! Round 1 submits the user's message with the registry's declared tools.
//! If the responder asks for an invocation, the orchestrator parses the
//! argument payload, looks the tool up in its own registry, executes it,
//! and submits a round-2 request carrying the result. Round 2's answer is
//! the conversation's final answer.
//!
//! Trust boundary: the invocation's `arguments` string is server-controlled
//! and treated as hostile until a registry tool's own validation accepts it.
//! Parse failures, unknown tool names, and rejected payloads all terminate
//! the conversation with a reported error. No partial answer is produced
//! and nothing is retried: the responder is deterministic, so a retry
//! would see the same outcome.

use serde_json::Value;
use tracing::{debug, info};

use crate::endpoint::ChatEndpoint;
use crate::protocol::{ChatRequest, ChatResponse, ResponsePayload};
use crate::tools::ToolRegistry;
use crate::types::message::ChatMessage;
use crate::{Error, Result};

/// Drives one conversation at a time against any [`ChatEndpoint`]. Holds no
/// state between conversations.
pub struct ToolOrchestrator<E> {
    endpoint: E,
    registry: ToolRegistry,
    model: String,
}

impl<E: ChatEndpoint> ToolOrchestrator<E> {
    pub fn new(endpoint: E, registry: ToolRegistry, model: impl Into<String>) -> Self {
        Self {
            endpoint,
            registry,
            model: model.into(),
        }
    }

    /// Run the full conversation for one user message and return the final
    /// answer.
    pub async fn run(&self, user_message: &str) -> Result<String> {
        let user = ChatMessage::user(user_message);
        let round1 = ChatRequest::new(self.model.clone(), vec![user.clone()])
            .with_tools(self.registry.specs());

        let response = self.endpoint.submit(round1).await?;
        debug!(id = %response.id, "round 1 response");

        let (name, arguments) = match response.result {
            // No tool requested; the conversation ends after one round.
            ResponsePayload::DirectAnswer { text } => return Ok(text),
            ResponsePayload::ToolInvocation { name, arguments } => (name, arguments),
        };

        info!(tool = %name, "responder requested tool invocation");

        // Parse before lookup: a garbled payload is a protocol-level fault
        // and should be reported as such even if the tool name is unknown.
        let parsed: Value =
            serde_json::from_str(&arguments).map_err(|source| Error::ArgumentParse {
                raw: arguments.clone(),
                source,
            })?;

        let tool = self
            .registry
            .lookup(&name)
            .ok_or_else(|| Error::ToolNotFound { name: name.clone() })?;

        // The registry entry validates the payload; Evaluation errors
        // surface here and no round 2 is sent.
        let result = tool.invoke(parsed).await?;
        let result_text = serde_json::to_string(&result)?;
        info!(tool = %name, result = %result_text, "tool executed");

        let round2 = ChatRequest::new(
            self.model.clone(),
            vec![
                user,
                ChatMessage::tool_call(&name, &arguments),
                ChatMessage::tool_result(&name, &result_text),
            ],
        )
        .with_tools(self.registry.specs());
        round2.validate()?;

        let final_response = self.endpoint.submit(round2).await?;
        self.final_answer(final_response)
    }

    fn final_answer(&self, response: ChatResponse) -> Result<String> {
        match response.result {
            ResponsePayload::DirectAnswer { text } => Ok(text),
            ResponsePayload::ToolInvocation { name, .. } => Err(Error::protocol_violation(
                format!("round 2 answered with another tool invocation ({name})"),
            )),
        }
    }
}
