//! Transcoding of provider stream events into stream lines with
//! concurrent usage accounting

use futures_util::{Stream, StreamExt};
use tokio::sync::{mpsc, oneshot};

use crate::error::AdapterError;
use crate::protocol::MessagesStreamEvent;
use crate::types::{StreamLine, UsageCounts};

/// Bound on undelivered stream lines before the transcoder applies
/// backpressure to the provider read loop
pub(crate) const LINE_BUFFER: usize = 32;

/// Drain a provider event stream, republishing text deltas as stream lines
/// and accumulating usage
///
/// Usage deltas are added wherever an event reports them (event level
/// first, else under the message envelope): accumulated, never
/// overwritten, since providers report partial numbers per chunk. Only
/// text-delta content events produce output lines, in provider order;
/// everything else is skipped after usage extraction.
///
/// The output channel closes before `usage_slot` resolves, so the total is
/// final by the time it is observable. A consumer that drops the output
/// receiver does not stop the drain; remaining events are still read so
/// accounting stays complete. An upstream error forwards as the last item
/// and ends the drain, resolving usage with the totals seen so far.
pub async fn transcode<S>(
    events: S,
    output: mpsc::Sender<Result<StreamLine, AdapterError>>,
    usage_slot: oneshot::Sender<UsageCounts>,
) where
    S: Stream<Item = Result<MessagesStreamEvent, AdapterError>>,
{
    let mut events = std::pin::pin!(events);
    let mut usage = UsageCounts::default();

    while let Some(next) = events.next().await {
        match next {
            Ok(event) => {
                if let Some(delta) = event.usage_delta() {
                    usage.input_tokens += delta.input_tokens.unwrap_or(0);
                    usage.output_tokens += delta.output_tokens.unwrap_or(0);
                }

                if let Some(text) = event.text_delta() {
                    // A closed channel only means the consumer left early
                    let _ = output
                        .send(Ok(StreamLine {
                            text: text.to_owned(),
                        }))
                        .await;
                }
            }
            Err(e) => {
                let _ = output.send(Err(e)).await;
                break;
            }
        }
    }

    drop(output);
    let _ = usage_slot.send(usage);
}
