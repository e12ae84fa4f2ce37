//! Completion dispatch: adaptation, budgeting, and upstream calls

use std::sync::Arc;

use prism_config::{AdapterConfig, Config};
use tokio::sync::{mpsc, oneshot};

use crate::adapt::{self, AdaptedConversation};
use crate::budget;
use crate::catalog::{self, ModelDescriptor};
use crate::error::AdapterError;
use crate::protocol::MessagesRequest;
use crate::tools;
use crate::transcode;
use crate::types::{CompletionRequest, ContentPart, StreamHandle, SyncCompletion, UsageCounts};
use crate::upstream::{HttpUpstream, Upstream};

/// Outcome of a completion call
#[derive(Debug)]
pub enum Completion {
    /// Non-streaming result
    Message(Box<SyncCompletion>),
    /// Streaming handle, returned before any upstream progress
    Stream(StreamHandle),
}

/// Shared state for the adapter
///
/// Cheap to clone; every field is request-independent and read-only. The
/// upstream handle is the only resource shared across requests.
#[derive(Clone)]
pub struct AdapterState {
    inner: Arc<AdapterStateInner>,
}

struct AdapterStateInner {
    upstream: Arc<dyn Upstream>,
    settings: AdapterConfig,
}

impl AdapterState {
    /// Build from configuration with a real HTTP upstream
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(HttpUpstream::new(&config.upstream)), config.adapter.clone())
    }

    /// Build with an injected upstream implementation
    pub fn new(upstream: Arc<dyn Upstream>, settings: AdapterConfig) -> Self {
        Self {
            inner: Arc::new(AdapterStateInner { upstream, settings }),
        }
    }

    /// Execute one completion request
    ///
    /// Messages are adapted and budget-checked before any network call.
    /// Non-streaming requests resolve with the raw provider response;
    /// streaming requests return a handle immediately while the provider
    /// call and transcoding continue in a background task.
    ///
    /// # Errors
    ///
    /// Returns `TokenBudgetExceeded` when the estimated input exceeds the
    /// configured budget. Upstream failures pass through unchanged on the
    /// non-streaming path; on the streaming path they arrive through the
    /// handle's output channel.
    pub async fn complete(&self, request: CompletionRequest) -> Result<Completion, AdapterError> {
        let conversation = adapt::normalize_messages(&request.messages);
        let estimate = budget::estimate_and_check(&conversation, self.inner.settings.max_input_tokens)?;
        tracing::debug!(input_tokens = estimate, stream = request.stream, "dispatching completion");

        let stream = request.stream;
        let wire = self.wire_request(request, conversation);

        if stream {
            Ok(Completion::Stream(self.spawn_stream(wire)))
        } else {
            let message = self.inner.upstream.send(&wire).await?;
            let usage = reported_usage(&message);

            Ok(Completion::Message(Box::new(SyncCompletion {
                message,
                usage,
                finish_reason: "stop".to_owned(),
            })))
        }
    }

    /// Assemble the outbound wire request
    fn wire_request(&self, request: CompletionRequest, conversation: AdaptedConversation) -> MessagesRequest {
        let settings = &self.inner.settings;
        let normalized = request.tools.map(tools::normalize_tools);

        MessagesRequest {
            model: request.model.unwrap_or_else(|| settings.default_model.clone()),
            max_tokens: settings.max_output_tokens,
            system: Some(system_instruction(&settings.preamble, &conversation.system)),
            messages: conversation.messages,
            temperature: Some(settings.temperature),
            stream: None,
            tools: tools::to_provider_tools(normalized.as_deref()),
        }
    }

    /// Start the background stream task and hand back its observables
    fn spawn_stream(&self, wire: MessagesRequest) -> StreamHandle {
        let (line_tx, line_rx) = mpsc::channel(transcode::LINE_BUFFER);
        let (usage_tx, usage_rx) = oneshot::channel();
        let upstream = Arc::clone(&self.inner.upstream);

        tokio::spawn(async move {
            match upstream.stream(wire).await {
                Ok(events) => transcode::transcode(events, line_tx, usage_tx).await,
                Err(e) => {
                    // Dial failure: the error is the whole stream
                    let _ = line_tx.send(Err(e)).await;
                    drop(line_tx);
                    let _ = usage_tx.send(UsageCounts::default());
                }
            }
        });

        StreamHandle {
            output: line_rx,
            usage: usage_rx,
        }
    }

    /// Advertised model catalog
    pub fn models(&self) -> &'static [ModelDescriptor] {
        catalog::descriptors()
    }

    /// Model ids and aliases flattened into one name list
    pub fn list(&self) -> Vec<String> {
        catalog::names()
    }
}

/// Build the outbound system instruction: the configured preamble followed
/// by the serialized system prompt list when one exists
fn system_instruction(preamble: &str, system: &[ContentPart]) -> String {
    if system.is_empty() {
        return preamble.to_owned();
    }

    let serialized = serde_json::to_string(system).unwrap_or_default();
    format!("{preamble}\n\n{serialized}")
}

/// Usage as reported in a non-streaming provider response
fn reported_usage(message: &serde_json::Value) -> UsageCounts {
    message
        .get("usage")
        .and_then(|usage| serde_json::from_value(usage.clone()).ok())
        .unwrap_or_default()
}
