use serde::{Deserialize, Serialize};

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructional content, lifted out of the turn sequence
    System,
    /// User turn
    User,
    /// Assistant turn
    Assistant,
}

/// Message as supplied by the caller
///
/// The shape is deliberately loose: the role may be absent (it defaults to
/// user during adaptation) and the content may be a bare string, a single
/// block, or a block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Message payload
    pub content: MessageContent,
}

/// Caller-supplied message content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Bare string shorthand
    Text(String),
    /// Sequence of content blocks
    Parts(Vec<ContentPart>),
    /// Single block not wrapped in a sequence
    Part(ContentPart),
}

impl MessageContent {
    /// Normalize to a block sequence
    pub fn into_parts(self) -> Vec<ContentPart> {
        match self {
            Self::Text(text) => vec![ContentPart::text(text)],
            Self::Parts(parts) => parts,
            Self::Part(part) => vec![part],
        }
    }
}

/// One typed fragment of a message payload
///
/// Only text blocks are interpreted by the adapter; every other block
/// shape (image, `tool_use`, `tool_result`, ...) passes through to the
/// provider untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    /// `{ "type": "text", "text": ... }` block
    Text {
        /// Block type tag
        #[serde(rename = "type")]
        kind: TextTag,
        /// The text string
        text: String,
    },
    /// Any other block, forwarded verbatim
    Other(serde_json::Value),
}

impl ContentPart {
    /// Build a text block
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            kind: TextTag::Text,
            text: text.into(),
        }
    }

    /// The text payload, when this is a text block
    pub const fn as_text(&self) -> Option<&String> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Other(_) => None,
        }
    }
}

/// Tag pinning the text variant to `"type": "text"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextTag {
    /// The only admitted value
    #[default]
    #[serde(rename = "text")]
    Text,
}
