//! Input size budgeting ahead of any upstream call

use crate::adapt::AdaptedConversation;
use crate::error::AdapterError;

/// Divisor for the character-count token heuristic
///
/// Deliberately an approximation: the adapter never tokenizes exactly, it
/// only needs a stable, cheap signal to reject oversized requests early.
pub const CHARS_PER_TOKEN: u64 = 4;

/// Estimate the input size of an adapted conversation and reject it when
/// it exceeds `limit`
///
/// The estimate is the serialized length of turns plus system content,
/// divided by [`CHARS_PER_TOKEN`]. An estimate equal to the limit passes;
/// strictly greater fails with [`AdapterError::TokenBudgetExceeded`]
/// carrying both numbers. Deterministic for identical input.
pub fn estimate_and_check(conversation: &AdaptedConversation, limit: u64) -> Result<u64, AdapterError> {
    let messages = serde_json::to_string(&conversation.messages)
        .map_err(|e| AdapterError::Internal(e.into()))?;
    let system = serde_json::to_string(&conversation.system)
        .map_err(|e| AdapterError::Internal(e.into()))?;

    let chars = u64::try_from(messages.len() + system.len()).unwrap_or(u64::MAX);
    let estimate = chars / CHARS_PER_TOKEN;

    if estimate > limit {
        return Err(AdapterError::TokenBudgetExceeded {
            input_tokens: estimate,
            max_tokens: limit,
        });
    }

    Ok(estimate)
}
