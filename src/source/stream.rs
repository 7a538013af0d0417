//! Push-stream ingestion — buffer every record, run only after the end
//! signal.
//!
//! The upstream source emits one record per "data" event and terminates
//! with an "end" signal, or aborts with a single error. That contract is
//! modeled as an mpsc channel of `Result<MessageRecord, SourceError>`:
//! the producer closing the channel is the end signal, and the first
//! error item aborts the whole batch. Downstream stages never see
//! partial input.

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::SourceError;
use crate::source::types::MessageRecord;

/// Ordered push stream of message records, closed by the producer.
pub type MessageStream = mpsc::UnboundedReceiver<Result<MessageRecord, SourceError>>;

/// Sending half handed to source implementations.
pub type MessageSink = mpsc::UnboundedSender<Result<MessageRecord, SourceError>>;

/// Create a connected sink/stream pair.
pub fn message_channel() -> (MessageSink, MessageStream) {
    mpsc::unbounded_channel()
}

/// Drain a stream into an ordered buffer.
///
/// Returns only once the producer closes the channel. An error item
/// aborts the drain immediately and propagates — no partial batch is
/// ever returned.
pub async fn collect_messages(mut stream: MessageStream) -> Result<Vec<MessageRecord>, SourceError> {
    let mut buffer = Vec::new();
    while let Some(event) = stream.recv().await {
        buffer.push(event?);
    }
    debug!(count = buffer.len(), "Message stream drained");
    Ok(buffer)
}
