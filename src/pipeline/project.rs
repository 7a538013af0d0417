//! Bubble projection — visualization-ready records and the map payload.

use serde::Serialize;
use tracing::debug;

use crate::error::PipelineError;
use crate::pipeline::types::{AggregatedRecord, BubblePoint, FILL_KEY};

/// Below this count the display radius is doubled so low-frequency
/// origins stay visible on the map.
const RADIUS_DOUBLING_THRESHOLD: u64 = 10;

/// Project one aggregate into a bubble, or skip it when geo is absent.
///
/// An unresolvable IP produces no bubble — the record is dropped here,
/// never dereferenced blind.
pub fn project_bubble(record: AggregatedRecord) -> Option<BubblePoint> {
    let Some(geo) = record.geo else {
        debug!(ip = %record.ip, count = record.count, "Skipping aggregate without geo data");
        return None;
    };

    let radius = if record.count < RADIUS_DOUBLING_THRESHOLD {
        record.count * 2
    } else {
        record.count
    };

    let (latitude, longitude) = (geo.latitude(), geo.longitude());
    let country = if geo.country == "US" {
        "USA".to_string()
    } else {
        geo.country
    };

    Some(BubblePoint {
        name: record.ip,
        fill_key: FILL_KEY.to_string(),
        frequency: record.count,
        city: geo.city,
        zip: geo.zip,
        region: geo.region,
        radius,
        country,
        latitude,
        longitude,
    })
}

/// Project a batch of aggregates, dropping geo-less entries.
pub fn project_bubbles(records: Vec<AggregatedRecord>) -> Vec<BubblePoint> {
    records.into_iter().filter_map(project_bubble).collect()
}

/// Payload handed to the rendering layer: the serialized bubble array
/// under the `ips` key.
#[derive(Debug, Clone, Serialize)]
pub struct MapPayload {
    pub ips: String,
}

impl MapPayload {
    pub fn new(points: &[BubblePoint]) -> Result<Self, PipelineError> {
        Ok(Self {
            ips: serde_json::to_string(points)?,
        })
    }
}
