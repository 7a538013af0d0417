//! Geographic metadata types.

use serde::{Deserialize, Serialize};

/// Geographic attributes resolved for an IP address.
///
/// `ll` is the `[latitude, longitude]` pair in the shape the lookup
/// collaborator delivers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoInfo {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub region: String,
    /// ISO country code (e.g. "US", "DE").
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub ll: [f64; 2],
}

impl GeoInfo {
    pub fn latitude(&self) -> f64 {
        self.ll[0]
    }

    pub fn longitude(&self) -> f64 {
        self.ll[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_lookup_shape() {
        let json = r#"{
            "city": "Mountain View",
            "zip": "94043",
            "region": "CA",
            "country": "US",
            "ll": [37.4192, -122.0574]
        }"#;

        let geo: GeoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(geo.city, "Mountain View");
        assert_eq!(geo.country, "US");
        assert!((geo.latitude() - 37.4192).abs() < f64::EPSILON);
        assert!((geo.longitude() + 122.0574).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_fields_default() {
        let geo: GeoInfo = serde_json::from_str(r#"{"country": "DE"}"#).unwrap();
        assert_eq!(geo.country, "DE");
        assert!(geo.city.is_empty());
        assert_eq!(geo.ll, [0.0, 0.0]);
    }
}
