//! End-to-end demo of the tool-calling loop.
//!
//! Runs two conversations against the responder, mirroring the shape of a
//! real function-calling session:
//!
//! 1. no tools declared — the responder's canned reply comes straight back;
//! 2. with the calculator registered — the responder requests an invocation,
//!    the orchestrator executes it through the registry, and the follow-up
//!    round echoes the result as the final answer.
//!
//! Set `TOOLCALL_BASE_URL` to drive a remote mock server instead of the
//! in-process responder.

use std::sync::Arc;

use toolcall_mock::{
    Calculator, ChatEndpoint, HttpEndpoint, ResponderEngine, ToolOrchestrator, ToolRegistry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .compact()
        .init();

    let endpoint: Arc<dyn ChatEndpoint> = match std::env::var("TOOLCALL_BASE_URL") {
        Ok(base_url) => Arc::new(HttpEndpoint::new(base_url)?),
        Err(_) => Arc::new(ResponderEngine::default()),
    };

    // Conversation 1: no tools — direct reply.
    let bare = ToolOrchestrator::new(endpoint.clone(), ToolRegistry::new(), "gpt-4");
    let reply = bare.run("Hello, how are you?").await?;
    println!("response 1: {reply}");

    // Conversation 2: calculator registered — full two-round loop.
    let registry = ToolRegistry::new().register(Arc::new(Calculator));
    let looped = ToolOrchestrator::new(endpoint, registry, "gpt-4");
    let answer = looped.run("What is 2+2?").await?;
    println!("response 2: {answer}");

    Ok(())
}
