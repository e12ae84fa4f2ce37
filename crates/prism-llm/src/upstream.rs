//! Upstream Messages API client

use std::pin::Pin;

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::{Stream, StreamExt};
use prism_config::UpstreamConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::AdapterError;
use crate::protocol::{self, MessagesRequest, MessagesStreamEvent};

/// Asynchronous sequence of provider stream events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<MessagesStreamEvent, AdapterError>> + Send>>;

/// Connection to the provider's Messages API
///
/// Provider failures pass through unchanged; the adapter never retries.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Send a non-streaming request, returning the raw response body
    async fn send(&self, request: &MessagesRequest) -> Result<serde_json::Value, AdapterError>;

    /// Send a streaming request, returning the decoded event sequence
    async fn stream(&self, request: MessagesRequest) -> Result<EventStream, AdapterError>;
}

/// HTTP implementation over reqwest
pub struct HttpUpstream {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl HttpUpstream {
    /// Create from upstream configuration
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never
    /// happen).
    pub fn new(config: &UpstreamConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(protocol::DEFAULT_BASE_URL).expect("valid default URL"));

        Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key.clone(),
        }
    }

    /// Build the messages endpoint URL
    fn messages_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/messages")
    }

    /// Issue one POST to the messages endpoint, mapping transport and
    /// status failures
    async fn post(&self, request: &MessagesRequest) -> Result<reqwest::Response, AdapterError> {
        let mut builder = self
            .client
            .post(self.messages_url())
            .header("anthropic-version", protocol::API_VERSION)
            .json(request);

        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "upstream request failed");
            AdapterError::Upstream(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "upstream returned error");
            return Err(AdapterError::Upstream(format!("provider returned {status}: {body}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn send(&self, request: &MessagesRequest) -> Result<serde_json::Value, AdapterError> {
        let response = self.post(request).await?;

        response
            .json()
            .await
            .map_err(|e| AdapterError::Upstream(format!("failed to parse response: {e}")))
    }

    async fn stream(&self, mut request: MessagesRequest) -> Result<EventStream, AdapterError> {
        request.stream = Some(true);
        let response = self.post(&request).await?;

        let events = response.bytes_stream().eventsource().filter_map(|result| {
            let item = match result {
                Ok(event) => {
                    let data = event.data.trim();
                    if data.is_empty() {
                        None
                    } else {
                        match serde_json::from_str::<MessagesStreamEvent>(data) {
                            Ok(event) => Some(Ok(event)),
                            Err(e) => {
                                tracing::debug!(error = %e, "skipping unparseable SSE event");
                                None
                            }
                        }
                    }
                }
                Err(e) => Some(Err(AdapterError::Streaming(e.to_string()))),
            };

            async move { item }
        });

        Ok(Box::pin(events))
    }
}
