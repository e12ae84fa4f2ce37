use serde::Deserialize;

/// Instruction prepended to every outbound system prompt when the config
/// does not supply its own
pub const DEFAULT_PREAMBLE: &str = "You are a general-purpose assistant served through the Prism \
     gateway. Caller-provided system instructions, if any, follow.";

/// Tuning for request adaptation and dispatch
///
/// Sampling temperature and output length are fixed per deployment rather
/// than per request: completions stay reproducible and cost-bounded.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Model used when the caller does not name one
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Input budget in estimated tokens; larger requests are rejected
    /// before any upstream call
    #[serde(default = "default_max_input_tokens")]
    pub max_input_tokens: u64,
    /// Maximum tokens the upstream may generate per completion
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Sampling temperature, in `[0.0, 1.0]`
    #[serde(default)]
    pub temperature: f64,
    /// Preamble prepended to the outbound system instruction
    #[serde(default = "default_preamble")]
    pub preamble: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            max_input_tokens: default_max_input_tokens(),
            max_output_tokens: default_max_output_tokens(),
            temperature: 0.0,
            preamble: default_preamble(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_owned()
}

const fn default_max_input_tokens() -> u64 {
    10_000
}

const fn default_max_output_tokens() -> u32 {
    4096
}

fn default_preamble() -> String {
    DEFAULT_PREAMBLE.to_owned()
}
