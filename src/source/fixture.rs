//! Replay source — pushes a pre-loaded batch through the stream contract.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::error::SourceError;
use crate::source::MailSource;
use crate::source::stream::{MessageStream, message_channel};
use crate::source::types::MessageRecord;

/// A source that replays an in-memory batch of records.
///
/// Stands in for a live mail provider: each record arrives as its own
/// stream item, in batch order, and the stream closes once the batch
/// (or the `max` cap) is exhausted. The query is ignored — fixture
/// batches are assumed to be pre-filtered.
pub struct FixtureSource {
    records: Vec<MessageRecord>,
}

impl FixtureSource {
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Load a batch from a JSON array file.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let data = std::fs::read_to_string(path)?;
        let records: Vec<MessageRecord> = serde_json::from_str(&data)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl MailSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch(&self, _query: &str, max: usize) -> Result<MessageStream, SourceError> {
        let (tx, rx) = message_channel();
        let batch: Vec<MessageRecord> = self.records.iter().take(max).cloned().collect();
        debug!(count = batch.len(), "Replaying fixture batch");

        tokio::spawn(async move {
            for record in batch {
                if tx.send(Ok(record)).is_err() {
                    // Receiver dropped — nothing left to deliver.
                    return;
                }
            }
            // Dropping the sender closes the stream: the end signal.
        });

        Ok(rx)
    }
}
