#![allow(clippy::must_use_candidate)]

pub mod adapter;
mod env;
mod loader;
pub mod server;
pub mod upstream;

use serde::Deserialize;

pub use adapter::AdapterConfig;
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

/// Top-level Prism configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream provider connection
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Request adaptation tuning
    #[serde(default)]
    pub adapter: AdapterConfig,
}
