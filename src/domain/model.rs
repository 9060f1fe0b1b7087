use serde::{Deserialize, Serialize};

/// Status Google reports for a successful call.
pub const STATUS_OK: &str = "OK";

/// Name used when a nearby result has none.
pub const UNKNOWN_NAME: &str = "Unknown Name";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    /// Only the first entry is decoded, the rest may be partial.
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: GeocodeGeometry,
}

/// Geocoding always returns a location, unlike nearby search.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeGeometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
}

/// One candidate from a nearby search. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyPlace {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub geometry: Option<Geometry>,
}

impl NearbyPlace {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    pub fn id(&self) -> &str {
        self.place_id.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: PlaceDetails,
}

/// Detail record exactly as the service returned it.
pub type PlaceDetails = serde_json::Map<String, serde_json::Value>;

/// The only detail field read downstream.
pub fn website_of(details: &PlaceDetails) -> Option<String> {
    details
        .get("website")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_place_defaults() {
        let place: NearbyPlace = serde_json::from_value(serde_json::json!({})).unwrap();

        assert_eq!(place.display_name(), "Unknown Name");
        assert_eq!(place.id(), "");
        assert!(place.location().is_none());
    }

    #[test]
    fn test_nearby_place_geometry_without_location() {
        let place: NearbyPlace = serde_json::from_value(serde_json::json!({
            "name": "Joe's",
            "place_id": "abc",
            "geometry": {"viewport": {}}
        }))
        .unwrap();

        assert_eq!(place.display_name(), "Joe's");
        assert_eq!(place.id(), "abc");
        assert!(place.location().is_none());
    }

    #[test]
    fn test_website_of_ignores_non_string_values() {
        let details: PlaceDetails = serde_json::from_value(serde_json::json!({
            "website": 42
        }))
        .unwrap();
        assert_eq!(website_of(&details), None);

        let details: PlaceDetails = serde_json::from_value(serde_json::json!({
            "name": "Joe's",
            "website": "https://joes.example"
        }))
        .unwrap();
        assert_eq!(website_of(&details), Some("https://joes.example".to_string()));
    }
}
