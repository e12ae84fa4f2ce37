use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Connection settings for the upstream Messages API
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Base URL override (defaults to the hosted API)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// API key for authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
}
