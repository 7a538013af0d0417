//! Origination pipeline — composes the five stages over a message batch.
//!
//! Flow:
//! 1. `extract_headers` — header projection per record
//! 2. `OriginParser` — routing-header IP extraction (sentinel on miss)
//! 3. `enrich_origins` — geolocation join
//! 4. `aggregate_origins` — per-IP frequency, sentinel dropped
//! 5. `project_bubbles` — visualization records, geo-less entries skipped

use std::sync::Arc;

use tracing::info;

use crate::error::PipelineError;
use crate::geo::GeoProvider;
use crate::pipeline::aggregate::aggregate_origins;
use crate::pipeline::enrich::enrich_origins;
use crate::pipeline::headers::{OriginParser, extract_headers};
use crate::pipeline::project::project_bubbles;
use crate::pipeline::types::BubblePoint;
use crate::source::stream::{MessageStream, collect_messages};
use crate::source::types::MessageRecord;

/// The origination pipeline. Holds the geolocation collaborator and the
/// compiled origination parser; stateless across runs.
pub struct OriginPipeline {
    geo: Arc<dyn GeoProvider>,
    parser: OriginParser,
}

impl OriginPipeline {
    pub fn new(geo: Arc<dyn GeoProvider>) -> Self {
        Self {
            geo,
            parser: OriginParser::new(),
        }
    }

    /// Run the synchronous batch transform over collected messages.
    pub fn run(&self, messages: &[MessageRecord]) -> Vec<BubblePoint> {
        let headers = extract_headers(messages);
        let origins = self.parser.parse_batch(&headers);
        let enriched = enrich_origins(self.geo.as_ref(), origins);
        let aggregated = aggregate_origins(enriched);
        let bubbles = project_bubbles(aggregated);

        info!(
            messages = messages.len(),
            bubbles = bubbles.len(),
            "Origination pipeline complete"
        );
        bubbles
    }

    /// Buffer a push stream to completion, then run the batch transform.
    ///
    /// A stream error aborts before stage 1 runs — no partial output.
    pub async fn run_stream(&self, stream: MessageStream) -> Result<Vec<BubblePoint>, PipelineError> {
        let messages = collect_messages(stream).await?;
        Ok(self.run(&messages))
    }
}
