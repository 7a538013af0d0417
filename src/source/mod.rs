//! Mail-retrieval boundary — push-style sources and the ingestion buffer.

pub mod fixture;
pub mod stream;
pub mod types;

pub use fixture::FixtureSource;
pub use stream::{MessageSink, MessageStream, collect_messages, message_channel};
pub use types::{HeaderLine, MessagePayload, MessageRecord, batch_window};

use async_trait::async_trait;

use crate::error::SourceError;

/// Trait for mail-retrieval collaborators — pure I/O, no pipeline logic.
///
/// Implementations deliver matching messages as a push stream and close
/// it when delivery is complete. The caller supplies the maximum record
/// count; retry and timeout policy, if any, live behind this boundary.
#[async_trait]
pub trait MailSource: Send + Sync {
    /// Source name (e.g. "fixture").
    fn name(&self) -> &str;

    /// Begin delivery of messages matching `query`, at most `max` records.
    async fn fetch(&self, query: &str, max: usize) -> Result<MessageStream, SourceError>;
}
