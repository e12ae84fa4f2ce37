//! Normalization of caller message lists into provider turn shape

use crate::protocol::Turn;
use crate::types::{ContentPart, Message, Role};

/// Result of message adaptation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaptedConversation {
    /// Provider-shaped turns; never contains a system entry or two
    /// consecutive user entries
    pub messages: Vec<Turn>,
    /// System content lifted out of the turn sequence, in encounter order
    pub system: Vec<ContentPart>,
}

/// Normalize a caller message list into provider turns plus extracted
/// system content
///
/// Pure with respect to its input: the caller's list is never mutated.
/// Per message, in original order:
/// - bare-string and single-block content become a block sequence
/// - a missing role defaults to user
/// - system content is appended to the system list and dropped from the
///   turn sequence
/// - a user message whose immediately preceding placed turn is also a user
///   turn merges into it, keeping the provider's strict role alternation
///   satisfiable when the caller supplies several user turns back to back
pub fn normalize_messages(messages: &[Message]) -> AdaptedConversation {
    let mut adapted = AdaptedConversation::default();

    for message in messages {
        let parts = message.content.clone().into_parts();

        match message.role.unwrap_or(Role::User) {
            Role::System => adapted.system.extend(parts),
            Role::User => match adapted.messages.last_mut() {
                Some(previous) if previous.role == Role::User => previous.content.extend(parts),
                _ => adapted.messages.push(Turn {
                    role: Role::User,
                    content: parts,
                }),
            },
            Role::Assistant => adapted.messages.push(Turn {
                role: Role::Assistant,
                content: parts,
            }),
        }
    }

    adapted
}
