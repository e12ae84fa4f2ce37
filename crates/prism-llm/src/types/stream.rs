use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use super::response::UsageCounts;
use crate::error::AdapterError;

/// One line of the outbound NDJSON stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamLine {
    /// Text delta exactly as the provider emitted it
    pub text: String,
}

/// Handle returned to streaming callers before any upstream progress
///
/// The two halves are independent observables: lines may be consumed
/// incrementally while the usage total is still pending. Usage resolves
/// exactly once, after `output` closes.
#[derive(Debug)]
pub struct StreamHandle {
    /// Incremental stream lines, in provider order
    pub output: mpsc::Receiver<Result<StreamLine, AdapterError>>,
    /// Final accumulated usage, resolved at stream end
    pub usage: oneshot::Receiver<UsageCounts>,
}
