//! Axum route handlers for the adapter surface

use axum::body::Body;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use bytes::Bytes;
use futures_util::StreamExt;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::AdapterError;
use crate::state::{AdapterState, Completion};
use crate::types::{CompletionRequest, StreamHandle};

/// Content type advertised for the line-delimited stream body
const NDJSON: &str = "application/x-ndjson";

/// Build the adapter router with all endpoints
pub fn adapter_router(state: AdapterState) -> Router {
    Router::new()
        .route("/v1/chat/completions", routing::post(chat_completions))
        .route("/v1/models", routing::get(list_models))
        .with_state(state)
}

/// Handle `POST /v1/chat/completions`
async fn chat_completions(State(state): State<AdapterState>, Json(request): Json<CompletionRequest>) -> Response {
    match state.complete(request).await {
        Ok(Completion::Message(completion)) => Json(completion).into_response(),
        Ok(Completion::Stream(handle)) => stream_response(handle),
        Err(e) => error_response(&e),
    }
}

/// Handle `GET /v1/models`
async fn list_models(State(state): State<AdapterState>) -> Response {
    let data: Vec<serde_json::Value> = state
        .list()
        .into_iter()
        .map(|name| serde_json::json!({ "id": name, "object": "model", "owned_by": "anthropic" }))
        .collect();

    Json(serde_json::json!({ "object": "list", "data": data })).into_response()
}

/// Build the NDJSON streaming response
///
/// One self-contained JSON object per line. Usage resolves only after the
/// line channel closes; it is awaited in a side task so totals reach the
/// log even when the client disconnects early.
fn stream_response(handle: StreamHandle) -> Response {
    let StreamHandle { output, usage } = handle;

    tokio::spawn(async move {
        if let Ok(usage) = usage.await {
            tracing::info!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "stream completed"
            );
        }
    });

    let lines = ReceiverStream::new(output).map(|item| {
        let value = match item {
            Ok(line) => serde_json::to_value(&line).unwrap_or_default(),
            Err(e) => serde_json::json!({
                "error": {
                    "type": e.error_type(),
                    "message": e.client_message(),
                }
            }),
        };

        let mut line = value.to_string();
        line.push('\n');
        Ok::<_, std::convert::Infallible>(Bytes::from(line))
    });

    Response::builder()
        .header(CONTENT_TYPE, NDJSON)
        .body(Body::from_stream(lines))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Convert a domain error to a JSON error response
fn error_response(error: &AdapterError) -> Response {
    let status = error.status_code();
    let body = serde_json::json!({
        "error": {
            "type": error.error_type(),
            "message": error.client_message(),
        }
    });

    (status, Json(body)).into_response()
}
