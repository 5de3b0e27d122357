//! # toolcall-mock
//!
//! A two-party simulation of a tool-calling (function-calling)
//! chat-completion protocol: a deterministic mock responder on one side, a
//! tool-executing client loop on the other.
//!
//! ## Overview
//!
//! The interesting part of tool calling is not the transport. It is the
//! request/response state machine, and the trust boundary at the point
//! where the client executes server-supplied instructions. This crate
//! models exactly that:
//!
//! - [`responder::ResponderEngine`] maps each incoming [`protocol::ChatRequest`]
//!   to exactly one [`protocol::ChatResponse`] via a stateless three-state
//!   decision: echo a tool result, request a tool invocation, or reply
//!   directly.
//! - [`orchestrator::ToolOrchestrator`] drives the two-round conversation,
//!   executing requested tools only through a capability-scoped
//!   [`tools::ToolRegistry`] whose entries validate their argument payloads
//!   before evaluating anything.
//!
//! The responder deliberately offers a server-chosen argument payload that
//! ignores what the user actually asked. A naive client would execute it
//! as-is; the registry design makes that impossible. See
//! [`tools::calculator`] for the reference tool, which parses expressions
//! with a closed arithmetic grammar instead of interpreting text as code.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use toolcall_mock::{Calculator, ResponderEngine, ToolOrchestrator, ToolRegistry};
//!
//! #[tokio::main]
//! async fn main() -> toolcall_mock::Result<()> {
//!     let registry = ToolRegistry::new().register(Arc::new(Calculator));
//!     let orchestrator = ToolOrchestrator::new(ResponderEngine::default(), registry, "gpt-4");
//!     let answer = orchestrator.run("What is 2+2?").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! The same loop runs over HTTP: serve [`server::router`] (or the
//! `mock_server` binary) and point an [`endpoint::HttpEndpoint`] at it.

pub mod endpoint;
pub mod orchestrator;
pub mod protocol;
pub mod responder;
pub mod server;
pub mod tools;
pub mod types;

// Re-export main types for convenience
pub use endpoint::{ChatEndpoint, HttpEndpoint};
pub use orchestrator::ToolOrchestrator;
pub use protocol::{ChatRequest, ChatResponse, ResponsePayload, Usage};
pub use responder::{ResponderConfig, ResponderEngine};
pub use tools::{Calculator, Tool, ToolRegistry};
pub use types::{
    message::{ChatMessage, Role},
    tool::{ToolChoice, ToolSpec},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
