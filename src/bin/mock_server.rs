//! Standalone mock responder server.
//!
//! Serves the deterministic three-state responder on
//! `POST /v1/chat/completions`. Bind address and the server-chosen tool
//! argument payload are env-overridable:
//!
//! ```text
//! TOOLCALL_BIND=127.0.0.1:8000 TOOLCALL_TOOL_ARGS='{"expression":"2+2"}' mock_server
//! ```

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use toolcall_mock::{server, ResponderConfig, ResponderEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .compact()
        .init();

    let mut config = ResponderConfig::default();
    if let Ok(args) = std::env::var("TOOLCALL_TOOL_ARGS") {
        config = config.with_tool_arguments(args);
    }
    if let Ok(reply) = std::env::var("TOOLCALL_CANNED_REPLY") {
        config = config.with_canned_reply(reply);
    }

    let bind = std::env::var("TOOLCALL_BIND").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    info!("mock responder listening on {bind}");

    let app = server::router(ResponderEngine::new(config));
    axum::serve(listener, app).await.context("server error")
}
