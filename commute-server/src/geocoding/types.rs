//! Wire types for the mapping provider.
//!
//! The provider speaks GeoJSON feature collections; only the fields the
//! engine consumes are modeled. Property fields are all optional because the
//! provider omits them freely depending on the feature class.

use serde::Deserialize;

use crate::domain::LatLng;

/// Response of the geocode search and reverse endpoints.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeFeature {
    pub properties: PlaceProperties,
}

/// Property bag of one geocoding feature.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceProperties {
    pub name: Option<String>,
    pub street: Option<String>,
    pub neighbourhood: Option<String>,
    pub locality: Option<String>,
    pub borough: Option<String>,
    pub county: Option<String>,
    pub region: Option<String>,
    /// Full formatted address line.
    pub formatted: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Response of the routing endpoint.
#[derive(Debug, Deserialize)]
pub struct RoutingResponse {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

#[derive(Debug, Deserialize)]
pub struct RouteFeature {
    pub properties: RouteProperties,
    pub geometry: Option<LineGeometry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteProperties {
    /// Total distance in meters.
    pub distance: Option<f64>,
    /// Total travel time in seconds.
    pub time: Option<f64>,
    pub legs: Vec<RouteLegDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteLegDto {
    pub steps: Vec<RouteStepDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteStepDto {
    pub instruction: Option<InstructionDto>,
    /// Step distance in meters.
    pub distance: Option<f64>,
    /// Step duration in seconds.
    pub time: Option<f64>,
    pub from_index: Option<usize>,
    pub to_index: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InstructionDto {
    pub text: Option<String>,
}

/// Route line geometry. The provider answers with either a single line or
/// one line per leg.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum LineGeometry {
    LineString(Vec<[f64; 2]>),
    MultiLineString(Vec<Vec<[f64; 2]>>),
}

impl LineGeometry {
    /// Flatten the geometry into ordered vertices.
    ///
    /// GeoJSON positions are [longitude, latitude].
    pub fn vertices(&self) -> Vec<LatLng> {
        match self {
            LineGeometry::LineString(points) => points
                .iter()
                .map(|[lon, lat]| LatLng::new(*lat, *lon))
                .collect(),
            LineGeometry::MultiLineString(lines) => lines
                .iter()
                .flatten()
                .map(|[lon, lat]| LatLng::new(*lat, *lon))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_search_response() {
        let json = r#"{
            "features": [
                {"properties": {"name": "SM City North EDSA", "formatted": "SM City North EDSA, Quezon City", "lat": 14.6564, "lon": 121.0302, "extra": 1}}
            ]
        }"#;

        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.features.len(), 1);
        let props = &parsed.features[0].properties;
        assert_eq!(props.name.as_deref(), Some("SM City North EDSA"));
        assert_eq!(props.lat, Some(14.6564));
        assert!(props.street.is_none());
    }

    #[test]
    fn missing_features_defaults_to_empty() {
        let parsed: GeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.features.is_empty());
    }

    #[test]
    fn line_string_vertices_swap_to_lat_lng() {
        let geometry: LineGeometry = serde_json::from_str(
            r#"{"type": "LineString", "coordinates": [[121.0359, 14.6741], [121.0580, 14.6575]]}"#,
        )
        .unwrap();

        let vertices = geometry.vertices();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0], LatLng::new(14.6741, 121.0359));
        assert_eq!(vertices[1], LatLng::new(14.6575, 121.0580));
    }

    #[test]
    fn multi_line_string_flattens() {
        let geometry: LineGeometry = serde_json::from_str(
            r#"{"type": "MultiLineString", "coordinates": [[[121.0, 14.6]], [[121.1, 14.7], [121.2, 14.8]]]}"#,
        )
        .unwrap();

        assert_eq!(geometry.vertices().len(), 3);
    }
}
