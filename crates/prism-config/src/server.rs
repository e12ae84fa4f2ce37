use std::net::SocketAddr;

use serde::Deserialize;

/// HTTP listener configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind; the binary falls back to `127.0.0.1:4100`
    pub listen_address: Option<SocketAddr>,
}
