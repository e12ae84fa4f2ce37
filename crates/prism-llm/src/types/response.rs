use serde::{Deserialize, Serialize};

/// Accumulated token accounting for one completion or stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounts {
    /// Tokens consumed by the prompt
    #[serde(default)]
    pub input_tokens: u64,
    /// Tokens generated by the model
    #[serde(default)]
    pub output_tokens: u64,
}

/// Result of a non-streaming completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncCompletion {
    /// Raw provider response, forwarded without reshaping
    pub message: serde_json::Value,
    /// Provider-reported usage
    pub usage: UsageCounts,
    /// Always `"stop"`; finer stop reasons live inside `message`
    pub finish_reason: String,
}
