//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, LatLng, Metric, RouteLeg};
use crate::geocoding::PlaceHit;
use crate::graph::Terminal;

/// Query for place search.
#[derive(Debug, Deserialize)]
pub struct PlaceSearchRequest {
    /// Free-text query
    pub q: String,
}

/// Response for place search.
#[derive(Debug, Serialize)]
pub struct PlaceSearchResponse {
    pub places: Vec<PlaceResult>,
}

/// One place in search results.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&PlaceHit> for PlaceResult {
    fn from(hit: &PlaceHit) -> Self {
        Self {
            name: hit.name.clone(),
            address: hit.address.clone(),
            latitude: hit.position.latitude,
            longitude: hit.position.longitude,
        }
    }
}

/// Query for reverse geocoding.
#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeRequest {
    pub lat: f64,
    pub lng: f64,
}

/// Response for reverse geocoding.
#[derive(Debug, Serialize)]
pub struct ReverseGeocodeResponse {
    pub short_name: String,
    pub area_label: String,
}

/// One terminal of the district graph.
#[derive(Debug, Serialize)]
pub struct TerminalResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Terminal> for TerminalResult {
    fn from(terminal: &Terminal) -> Self {
        Self {
            id: terminal.id.clone(),
            name: terminal.name.clone(),
            address: terminal.address.clone(),
            kind: terminal.kind.as_str().to_string(),
            latitude: terminal.position.latitude,
            longitude: terminal.position.longitude,
        }
    }
}

/// Response for the terminal listing.
#[derive(Debug, Serialize)]
pub struct TerminalsResponse {
    pub terminals: Vec<TerminalResult>,
}

/// Request to route over the static district graph.
#[derive(Debug, Deserialize)]
pub struct GraphRouteRequest {
    pub start: LatLng,
    pub end: LatLng,
    pub metric: Metric,
}

/// Request to route via live provider directions.
#[derive(Debug, Deserialize)]
pub struct LiveRouteRequest {
    pub start: LatLng,
    pub end: LatLng,
}

/// One leg of a routed itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub instruction: String,
    pub mode: String,
    pub distance_m: f64,
    pub duration_s: f64,
    pub waypoints: [usize; 2],
}

impl From<&RouteLeg> for LegResult {
    fn from(leg: &RouteLeg) -> Self {
        Self {
            instruction: leg.instruction.clone(),
            mode: leg.mode.as_str().to_string(),
            distance_m: leg.distance_m,
            duration_s: leg.duration_s,
            waypoints: [leg.waypoints.0, leg.waypoints.1],
        }
    }
}

/// A routed itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub id: String,
    pub total_time_min: f64,
    pub total_distance_km: f64,
    pub total_cost: f64,
    pub category: String,
    pub labels: Vec<String>,
    /// Ordered [latitude, longitude] pairs
    pub path: Vec<[f64; 2]>,
    pub legs: Vec<LegResult>,
}

impl From<&Itinerary> for ItineraryResult {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id.clone(),
            total_time_min: itinerary.total_time_min,
            total_distance_km: itinerary.total_distance_km,
            total_cost: itinerary.total_cost,
            category: itinerary.category.label().to_string(),
            labels: itinerary.labels.clone(),
            path: itinerary
                .path
                .iter()
                .map(|p| [p.latitude, p.longitude])
                .collect(),
            legs: itinerary.legs.iter().map(LegResult::from).collect(),
        }
    }
}

/// The three variants of a live route.
#[derive(Debug, Serialize)]
pub struct RouteVariantsResponse {
    pub fastest: ItineraryResult,
    pub cheapest: ItineraryResult,
    pub shortest: ItineraryResult,
}

/// Error body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteCategory, TravelMode, next_itinerary_id};

    #[test]
    fn itinerary_result_flattens_the_domain_type() {
        let itinerary = Itinerary {
            id: next_itinerary_id(),
            total_time_min: 40.0,
            total_distance_km: 5.0,
            total_cost: 33.0,
            path: vec![LatLng::new(14.6741, 121.0359), LatLng::new(14.6575, 121.0580)],
            legs: vec![RouteLeg {
                instruction: "Ride jeep to UP-Ayala Land TechnoHub".to_string(),
                mode: TravelMode::Ride,
                distance_m: 5000.0,
                duration_s: 2400.0,
                waypoints: (0, 1),
            }],
            category: RouteCategory::Fastest,
            labels: vec!["fastest".to_string()],
        };

        let result = ItineraryResult::from(&itinerary);
        assert_eq!(result.category, "fastest");
        assert_eq!(result.path, vec![[14.6741, 121.0359], [14.6575, 121.0580]]);
        assert_eq!(result.legs.len(), 1);
        assert_eq!(result.legs[0].mode, "ride");
        assert_eq!(result.legs[0].waypoints, [0, 1]);
    }

    #[test]
    fn request_dtos_deserialize() {
        let req: GraphRouteRequest = serde_json::from_str(
            r#"{"start": {"latitude": 14.6741, "longitude": 121.0359},
                "end": {"latitude": 14.6575, "longitude": 121.0580},
                "metric": "time"}"#,
        )
        .unwrap();
        assert_eq!(req.metric, Metric::Time);
        assert_eq!(req.start.latitude, 14.6741);

        let req: ReverseGeocodeRequest =
            serde_json::from_str(r#"{"lat": 14.6741, "lng": 121.0359}"#).unwrap();
        assert_eq!(req.lng, 121.0359);
    }
}
