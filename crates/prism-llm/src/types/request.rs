use serde::{Deserialize, Serialize};

use super::message::Message;
use super::tool::ToolShape;

/// Completion request accepted by the adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model id; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Conversation messages in caller order
    pub messages: Vec<Message>,
    /// Tool definitions, in any accepted convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolShape>>,
    /// Whether to stream the response
    #[serde(default)]
    pub stream: bool,
}
