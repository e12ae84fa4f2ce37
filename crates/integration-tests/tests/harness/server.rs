//! Full adapter server bound to an ephemeral port for tests

use std::net::SocketAddr;

use prism_config::{AdapterConfig, Config, ServerConfig, UpstreamConfig};
use prism_llm::{AdapterState, adapter_router};
use secrecy::SecretString;
use tokio_util::sync::CancellationToken;

/// Running adapter instance plus a client pointed at it
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start with default adapter settings, wired to the given upstream
    pub async fn start(upstream_url: &str) -> anyhow::Result<Self> {
        Self::start_with_settings(upstream_url, AdapterConfig::default()).await
    }

    /// Start with custom adapter settings, wired to the given upstream
    pub async fn start_with_settings(upstream_url: &str, adapter: AdapterConfig) -> anyhow::Result<Self> {
        let config = Config {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                base_url: Some(upstream_url.parse()?),
                api_key: Some(SecretString::from("test-key".to_owned())),
            },
            adapter,
        };

        let state = AdapterState::from_config(&config);
        let app = adapter_router(state);

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

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Client for issuing requests against this server
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
