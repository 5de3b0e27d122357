use thiserror::Error;

/// Unified error type for the tool-calling loop.
///
/// Every failure mode of a conversation maps to exactly one variant. Nothing
/// here is retryable: the responder is deterministic, so resubmitting an
/// identical request yields an identical, already-seen outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// The two parties disagree on protocol shape (e.g. the follow-up round
    /// answered with another tool invocation, or a tool-role message lacks
    /// its tool name or content payload).
    #[error("protocol violation: {detail}")]
    ProtocolViolation { detail: String },

    /// The tool-invocation arguments were not valid JSON. The raw payload is
    /// kept for diagnosis; this fires before any registry lookup.
    #[error("tool arguments are not valid JSON (raw payload: {raw:?}): {source}")]
    ArgumentParse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// The responder asked for a tool the local registry does not know.
    #[error("tool {name:?} not found in local registry")]
    ToolNotFound { name: String },

    /// The tool's own validation rejected the argument payload before
    /// evaluating anything.
    #[error("tool rejected arguments: {reason}")]
    Evaluation { reason: String },

    /// HTTP endpoint failure (connect, status, body decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Envelope encode/decode failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn protocol_violation(detail: impl Into<String>) -> Self {
        Error::ProtocolViolation {
            detail: detail.into(),
        }
    }

    pub fn evaluation(reason: impl Into<String>) -> Self {
        Error::Evaluation {
            reason: reason.into(),
        }
    }
}
