//! HTTP binding for the responder
//!
//! Exposes [`crate::responder::ResponderEngine`] at
//! `POST /v1/chat/completions`, plus a health probe. Transport only: the
//! decision protocol lives entirely in the responder, and the handler is a
//! straight request-in/response-out mapping.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::protocol::{ChatRequest, ChatResponse};
use crate::responder::ResponderEngine;

/// Build the router. The engine is shared state; it is stateless, so no
/// synchronization is needed between in-flight requests.
pub fn router(engine: ResponderEngine) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/chat/completions", post(chat_completions))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(engine))
}

async fn health() -> &'static str {
    "ok"
}

async fn chat_completions(
    State(engine): State<Arc<ResponderEngine>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(engine.respond(&request))
}
