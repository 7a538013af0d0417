//! The origination aggregation pipeline.
//!
//! A batch of message records flows through:
//! 1. header extraction
//! 2. origination parsing (`Received` headers → IPs)
//! 3. geo enrichment
//! 4. per-IP frequency aggregation
//! 5. bubble projection
//!
//! Each stage is a pure function over in-memory data; data flows
//! strictly downstream.

pub mod aggregate;
pub mod enrich;
pub mod headers;
pub mod processor;
pub mod project;
pub mod types;

pub use aggregate::aggregate_origins;
pub use enrich::enrich_origins;
pub use headers::{OriginParser, extract_headers};
pub use processor::OriginPipeline;
pub use project::{MapPayload, project_bubble, project_bubbles};
pub use types::{
    AggregatedRecord, BubblePoint, EnrichedOrigin, FILL_KEY, OriginationRecord, SENTINEL_IP,
};
