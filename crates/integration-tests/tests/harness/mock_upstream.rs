//! Mock Messages API backend for integration tests
//!
//! Serves canned JSON for non-streaming requests and a canned SSE event
//! sequence for streaming ones, recording what it was asked.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock Messages API server returning predictable responses
pub struct MockMessages {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    request_count: AtomicU32,
    last_body: Mutex<Option<serde_json::Value>>,
    events: Vec<serde_json::Value>,
}

impl MockMessages {
    /// Start the mock with the default streaming event sequence
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with_events(default_events()).await
    }

    /// Start the mock with a custom streaming event sequence
    pub async fn start_with_events(events: Vec<serde_json::Value>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            last_body: Mutex::new(None),
            events,
        });

        let app = Router::new()
            .route("/v1/messages", routing::post(handle_messages))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the upstream
    ///
    /// Includes `/v1` since the client appends `/messages`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent request
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.state.last_body.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Drop for MockMessages {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Event sequence replayed by [`MockMessages::start`]: usage on the
/// opening envelope, two text deltas spelling "Hello", a trailing usage
/// report, and the stop marker
pub fn default_events() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "type": "message_start",
            "message": {
                "id": "msg_mock",
                "type": "message",
                "role": "assistant",
                "model": "claude-sonnet-4-20250514",
                "usage": { "input_tokens": 10, "output_tokens": 1 }
            }
        }),
        serde_json::json!({
            "type": "content_block_start",
            "index": 0,
            "content_block": { "type": "text", "text": "" }
        }),
        serde_json::json!({
            "type": "content_block_delta",
            "index": 0,
            "delta": { "type": "text_delta", "text": "Hel" }
        }),
        serde_json::json!({
            "type": "content_block_delta",
            "index": 0,
            "delta": { "type": "text_delta", "text": "lo" }
        }),
        serde_json::json!({
            "type": "content_block_stop",
            "index": 0
        }),
        serde_json::json!({
            "type": "message_delta",
            "delta": { "stop_reason": "end_turn" },
            "usage": { "output_tokens": 11 }
        }),
        serde_json::json!({ "type": "message_stop" }),
    ]
}

async fn handle_messages(State(state): State<Arc<MockState>>, Json(body): Json<serde_json::Value>) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    if let Ok(mut guard) = state.last_body.lock() {
        *guard = Some(body.clone());
    }

    if body.get("stream").and_then(serde_json::Value::as_bool) == Some(true) {
        let mut sse = String::new();
        for event in &state.events {
            let kind = event
                .get("type")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("message_delta");
            sse.push_str(&format!("event: {kind}\ndata: {event}\n\n"));
        }

        ([(CONTENT_TYPE, "text/event-stream")], sse).into_response()
    } else {
        Json(serde_json::json!({
            "id": "msg_mock",
            "type": "message",
            "role": "assistant",
            "model": body.get("model").cloned().unwrap_or_default(),
            "content": [{ "type": "text", "text": "mock reply" }],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 10, "output_tokens": 4 }
        }))
        .into_response()
    }
}
