//! Geo enrichment — joins each origination with its lookup result.

use tracing::debug;

use crate::geo::GeoProvider;
use crate::pipeline::types::{EnrichedOrigin, OriginationRecord};

/// Resolve each origination IP through the geolocation collaborator.
///
/// A lookup miss is carried downstream as an absent geo, not an error;
/// the projector decides what to do with it. Input order is preserved.
pub fn enrich_origins(
    provider: &dyn GeoProvider,
    origins: Vec<OriginationRecord>,
) -> Vec<EnrichedOrigin> {
    origins
        .into_iter()
        .map(|origin| {
            let geo = provider.lookup(&origin.ip);
            if geo.is_none() {
                debug!(ip = %origin.ip, "Geo lookup miss");
            }
            EnrichedOrigin { ip: origin.ip, geo }
        })
        .collect()
}
