//! Messages API wire format types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{ContentPart, Role};

/// Default hosted API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Protocol revision header value
pub const API_VERSION: &str = "2023-06-01";

// -- Request types --

/// Request body for `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate (required by the provider)
    pub max_tokens: u32,
    /// System instruction (top-level, not in messages)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Conversation turns
    pub messages: Vec<Turn>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Whether to stream the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// Tool definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ProviderTool>>,
}

/// One conversational turn in provider shape
///
/// Content is always a block sequence, never a bare scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Role, `user` or `assistant`
    pub role: Role,
    /// Content blocks
    pub content: Vec<ContentPart>,
}

/// Tool definition in provider shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderTool {
    /// Tool name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool input
    pub input_schema: Value,
}

// -- Streaming types --

/// One SSE event from a streaming Messages session
///
/// Decoded permissively rather than as a closed tagged enum: unknown event
/// types must flow through the transcoder (skipped, not failed), and usage
/// may sit either at the event level or nested under `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesStreamEvent {
    /// Event type (`message_start`, `content_block_delta`, `ping`, ...)
    #[serde(default, rename = "type")]
    pub event_type: String,
    /// Delta payload on `content_block_delta` events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<EventDelta>,
    /// Event-level usage report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageDelta>,
    /// Nested message envelope (`message_start` events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<EventMessage>,
}

impl MessagesStreamEvent {
    /// Usage reported by this event, wherever it sits
    pub fn usage_delta(&self) -> Option<&UsageDelta> {
        self.usage
            .as_ref()
            .or_else(|| self.message.as_ref().and_then(|m| m.usage.as_ref()))
    }

    /// Text payload when this is a text-delta content event
    pub fn text_delta(&self) -> Option<&str> {
        if self.event_type != "content_block_delta" {
            return None;
        }
        let delta = self.delta.as_ref()?;
        if delta.delta_type.as_deref() != Some("text_delta") {
            return None;
        }
        delta.text.as_deref()
    }
}

/// Delta payload within a stream event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDelta {
    /// Delta type (`text_delta`, `input_json_delta`, ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub delta_type: Option<String>,
    /// Text fragment on text deltas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Message envelope within a `message_start` event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventMessage {
    /// Initial usage report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageDelta>,
}

/// Incremental usage numbers within one event
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UsageDelta {
    /// Input tokens reported by this event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    /// Output tokens reported by this event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_delta_extracted_from_content_block_delta() {
        let event: MessagesStreamEvent =
            serde_json::from_str(r#"{"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hel"}}"#)
                .unwrap();
        assert_eq!(event.text_delta(), Some("Hel"));
    }

    #[test]
    fn input_json_delta_is_not_a_text_delta() {
        let event: MessagesStreamEvent = serde_json::from_str(
            r#"{"type":"content_block_delta","index":0,"delta":{"type":"input_json_delta","partial_json":"{\"a\""}}"#,
        )
        .unwrap();
        assert_eq!(event.text_delta(), None);
    }

    #[test]
    fn usage_found_at_event_level() {
        let event: MessagesStreamEvent =
            serde_json::from_str(r#"{"type":"message_delta","delta":{"stop_reason":"end_turn"},"usage":{"output_tokens":12}}"#)
                .unwrap();
        let usage = event.usage_delta().unwrap();
        assert_eq!(usage.output_tokens, Some(12));
        assert_eq!(usage.input_tokens, None);
    }

    #[test]
    fn usage_found_under_message_envelope() {
        let event: MessagesStreamEvent = serde_json::from_str(
            r#"{"type":"message_start","message":{"id":"msg_1","role":"assistant","usage":{"input_tokens":9,"output_tokens":1}}}"#,
        )
        .unwrap();
        let usage = event.usage_delta().unwrap();
        assert_eq!(usage.input_tokens, Some(9));
    }

    #[test]
    fn unknown_event_types_still_decode() {
        let event: MessagesStreamEvent = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert_eq!(event.event_type, "ping");
        assert!(event.usage_delta().is_none());
        assert!(event.text_delta().is_none());
    }
}
