//! Shared types for the origination pipeline.

use serde::{Deserialize, Serialize};

use crate::geo::GeoInfo;

/// Placeholder IP used when no origination address can be determined.
/// Filtered out during aggregation — no bubble ever represents an
/// unknown origin.
pub const SENTINEL_IP: &str = "0.0.0.0";

/// Color-key constant consumed by the map front end. Carries no data
/// beyond format compatibility.
pub const FILL_KEY: &str = "TEST";

/// Derived origination for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginationRecord {
    pub ip: String,
}

impl OriginationRecord {
    pub fn sentinel() -> Self {
        Self {
            ip: SENTINEL_IP.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.ip == SENTINEL_IP
    }
}

/// An origination joined with its geographic lookup result.
#[derive(Debug, Clone)]
pub struct EnrichedOrigin {
    pub ip: String,
    /// Absent on a lookup miss; the projector skips such records.
    pub geo: Option<GeoInfo>,
}

/// Per-IP aggregate — exactly one entry per distinct origination IP.
#[derive(Debug, Clone)]
pub struct AggregatedRecord {
    pub ip: String,
    pub geo: Option<GeoInfo>,
    /// Number of messages whose derived origination IP matched. Always ≥ 1.
    pub count: u64,
}

/// Visualization-ready bubble record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubblePoint {
    /// The origination IP.
    pub name: String,
    pub fill_key: String,
    pub frequency: u64,
    pub city: String,
    pub zip: String,
    pub region: String,
    pub radius: u64,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}
