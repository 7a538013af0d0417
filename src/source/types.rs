//! Message-record types — the metadata shape delivered by the mail
//! retrieval collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLine {
    pub name: String,
    pub value: String,
}

impl HeaderLine {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Message payload — the header list is the only part the pipeline reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub headers: Vec<HeaderLine>,
}

/// One inbox message, as delivered by the mail-retrieval collaborator.
///
/// Field selection mirrors the metadata set requested from the provider
/// (`id`, `internalDate`, `snippet`, `historyId`, `labelIds`, `payload`,
/// `sizeEstimate`). Everything except `id` is optional so sparse field
/// selections still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: String,
    /// Delivery time as epoch milliseconds, stringified by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<MessagePayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_estimate: Option<u64>,
}

impl MessageRecord {
    /// Minimal record carrying only an id and a header list.
    pub fn with_headers(id: impl Into<String>, headers: Vec<HeaderLine>) -> Self {
        Self {
            id: id.into(),
            internal_date: None,
            snippet: None,
            history_id: None,
            label_ids: Vec::new(),
            payload: Some(MessagePayload { headers }),
            size_estimate: None,
        }
    }

    /// Header sequence, empty when the payload or header list is absent.
    pub fn headers(&self) -> &[HeaderLine] {
        self.payload
            .as_ref()
            .map(|p| p.headers.as_slice())
            .unwrap_or(&[])
    }

    /// Delivery timestamp parsed from `internal_date`.
    ///
    /// `None` when the field is absent or not a valid millisecond count.
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        let millis: i64 = self.internal_date.as_deref()?.parse().ok()?;
        DateTime::from_timestamp_millis(millis)
    }
}

/// Earliest and latest delivery timestamps across a batch.
///
/// Records without a parseable `internal_date` are skipped; `None` when
/// no record has one.
pub fn batch_window(records: &[MessageRecord]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let mut timestamps = records.iter().filter_map(MessageRecord::received_at);
    let first = timestamps.next()?;
    Some(timestamps.fold((first, first), |(min, max), ts| {
        (min.min(ts), max.max(ts))
    }))
}
