//! Endpoint seam between the orchestrator and whoever answers it
//!
//! [`ChatEndpoint`] is the only operation the orchestrator needs: submit one
//! request, get one response. [`crate::responder::ResponderEngine`]
//! implements it in-process; [`HttpEndpoint`] speaks the same JSON to a
//! remote responder (the [`crate::server`] binding or anything wire
//! compatible).

use async_trait::async_trait;
use std::env;
use std::time::Duration;

use crate::protocol::{ChatRequest, ChatResponse};
use crate::Result;

/// One request in, one response out. Synchronous per round; no side channel.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    async fn submit(&self, request: ChatRequest) -> Result<ChatResponse>;
}

#[async_trait]
impl<T: ChatEndpoint + ?Sized> ChatEndpoint for &T {
    async fn submit(&self, request: ChatRequest) -> Result<ChatResponse> {
        (**self).submit(request).await
    }
}

#[async_trait]
impl<T: ChatEndpoint + ?Sized> ChatEndpoint for std::sync::Arc<T> {
    async fn submit(&self, request: ChatRequest) -> Result<ChatResponse> {
        (**self).submit(request).await
    }
}

/// HTTP-backed endpoint posting to `{base_url}/v1/chat/completions`.
pub struct HttpEndpoint {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEndpoint {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let timeout_secs = env::var("TOOLCALL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl ChatEndpoint for HttpEndpoint {
    async fn submit(&self, request: ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<ChatResponse>().await?)
    }
}
