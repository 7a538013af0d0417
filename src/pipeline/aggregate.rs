//! Frequency aggregation keyed by origination IP.

use std::collections::HashMap;

use crate::pipeline::types::{AggregatedRecord, EnrichedOrigin, SENTINEL_IP};

/// Deduplicate enriched origins by IP, counting occurrences.
///
/// First-seen geo wins for repeated IPs; later geo for the same IP is
/// discarded. The sentinel entry is removed after processing so no
/// bubble ever represents an unknown origin. The map lives and dies
/// inside this function; the returned collection is unordered.
pub fn aggregate_origins(origins: Vec<EnrichedOrigin>) -> Vec<AggregatedRecord> {
    let mut by_ip: HashMap<String, AggregatedRecord> = HashMap::new();

    for origin in origins {
        match by_ip.get_mut(&origin.ip) {
            Some(existing) => existing.count += 1,
            None => {
                by_ip.insert(
                    origin.ip.clone(),
                    AggregatedRecord {
                        ip: origin.ip,
                        geo: origin.geo,
                        count: 1,
                    },
                );
            }
        }
    }

    by_ip.remove(SENTINEL_IP);
    by_ip.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoInfo;

    fn origin(ip: &str, city: Option<&str>) -> EnrichedOrigin {
        EnrichedOrigin {
            ip: ip.into(),
            geo: city.map(|c| GeoInfo {
                city: c.into(),
                zip: String::new(),
                region: String::new(),
                country: String::new(),
                ll: [0.0, 0.0],
            }),
        }
    }

    #[test]
    fn counts_occurrences_per_ip() {
        let aggregated = aggregate_origins(vec![
            origin("1.2.3.4", Some("Dublin")),
            origin("5.6.7.8", Some("Berlin")),
            origin("1.2.3.4", Some("Dublin")),
            origin("1.2.3.4", Some("Dublin")),
        ]);

        assert_eq!(aggregated.len(), 2);
        let by_ip: HashMap<&str, u64> = aggregated
            .iter()
            .map(|r| (r.ip.as_str(), r.count))
            .collect();
        assert_eq!(by_ip["1.2.3.4"], 3);
        assert_eq!(by_ip["5.6.7.8"], 1);
    }

    #[test]
    fn first_seen_geo_wins() {
        let aggregated = aggregate_origins(vec![
            origin("1.2.3.4", Some("Dublin")),
            origin("1.2.3.4", Some("Oslo")),
        ]);

        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].geo.as_ref().unwrap().city, "Dublin");
        assert_eq!(aggregated[0].count, 2);
    }

    #[test]
    fn sentinel_entries_are_dropped() {
        let aggregated = aggregate_origins(vec![
            origin("0.0.0.0", None),
            origin("1.2.3.4", Some("Dublin")),
            origin("0.0.0.0", None),
        ]);

        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].ip, "1.2.3.4");
    }

    #[test]
    fn all_sentinel_input_yields_empty_output() {
        let aggregated = aggregate_origins(vec![origin("0.0.0.0", None); 5]);
        assert!(aggregated.is_empty());
    }

    #[test]
    fn lookup_miss_is_aggregated_with_absent_geo() {
        let aggregated = aggregate_origins(vec![origin("5.5.5.5", None)]);
        assert_eq!(aggregated.len(), 1);
        assert!(aggregated[0].geo.is_none());
    }
}
