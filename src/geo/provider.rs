//! Geolocation collaborator boundary.

use std::collections::HashMap;
use std::path::Path;

use crate::error::GeoError;
use crate::geo::types::GeoInfo;

/// Synchronous IP-to-geography lookup.
///
/// A miss is `None`. The pipeline excludes missed IPs from its output
/// rather than treating a miss as a failure.
pub trait GeoProvider: Send + Sync {
    fn lookup(&self, ip: &str) -> Option<GeoInfo>;
}

/// In-memory provider backed by an `ip → GeoInfo` table.
///
/// Serves tests and offline runs; a database- or network-backed
/// provider lives behind the same trait.
#[derive(Debug, Clone, Default)]
pub struct StaticGeoTable {
    entries: HashMap<String, GeoInfo>,
}

impl StaticGeoTable {
    pub fn new(entries: HashMap<String, GeoInfo>) -> Self {
        Self { entries }
    }

    /// Load a table from a JSON object file keyed by IP.
    pub fn from_file(path: &Path) -> Result<Self, GeoError> {
        let data = std::fs::read_to_string(path)?;
        let entries: HashMap<String, GeoInfo> = serde_json::from_str(&data)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GeoProvider for StaticGeoTable {
    fn lookup(&self, ip: &str) -> Option<GeoInfo> {
        self.entries.get(ip).cloned()
    }
}
