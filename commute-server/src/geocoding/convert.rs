//! Normalization of provider responses.
//!
//! Pure functions, no network: field-priority selection for reverse
//! geocoding, the district fare model, and itinerary construction from a
//! routing response.

use serde::Serialize;

use crate::domain::{Itinerary, LatLng, RouteCategory, RouteLeg, TravelMode, next_itinerary_id};

use super::types::{GeocodeResponse, PlaceProperties, RoutingResponse};

/// Jeepney base fare in pesos.
pub const BASE_FARE: f64 = 13.0;

/// Per-kilometer fare increment beyond the flag-down distance.
const FARE_PER_KM: f64 = 2.0;

/// Kilometers covered by the base fare.
const FLAG_DOWN_KM: f64 = 4.0;

/// A place returned by search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceHit {
    pub name: String,
    pub address: String,
    pub position: LatLng,
}

/// A reverse-geocoded location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub short_name: String,
    pub area_label: String,
}

/// Estimated fare for a driving distance.
///
/// The base fare covers the first 4 km; 2 pesos per kilometer after that,
/// rounded up to the next whole peso.
pub fn estimate_fare(distance_km: f64) -> f64 {
    (BASE_FARE + FARE_PER_KM * (distance_km - FLAG_DOWN_KM).max(0.0)).ceil()
}

/// Pick display names for a reverse-geocoded feature.
///
/// Short name: first non-empty of neighbourhood, locality, borough, county,
/// region. Area label: first non-empty of name, street, formatted address.
pub fn resolve_location(props: &PlaceProperties) -> ResolvedLocation {
    let short_name = [
        &props.neighbourhood,
        &props.locality,
        &props.borough,
        &props.county,
        &props.region,
    ]
    .into_iter()
    .find_map(non_empty)
    .unwrap_or_else(|| "Unknown Location".to_string());

    let area_label = [&props.name, &props.street, &props.formatted]
        .into_iter()
        .find_map(non_empty)
        .unwrap_or_else(|| "Unknown Area".to_string());

    ResolvedLocation {
        short_name,
        area_label,
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Flatten a search response into place hits.
///
/// Features without a usable name or position are dropped.
pub fn place_hits(response: GeocodeResponse) -> Vec<PlaceHit> {
    response
        .features
        .into_iter()
        .filter_map(|feature| {
            let props = feature.properties;
            let position = LatLng::new(props.lat?, props.lon?);
            let name = non_empty(&props.name)
                .or_else(|| non_empty(&props.street))
                .or_else(|| non_empty(&props.formatted))?;
            let address = non_empty(&props.formatted).unwrap_or_default();
            Some(PlaceHit {
                name,
                address,
                position,
            })
        })
        .collect()
}

/// Build a live itinerary from a routing response.
///
/// Returns `None` when the response carries no route feature or fewer than
/// two polyline vertices.
pub fn route_itinerary(response: RoutingResponse) -> Option<Itinerary> {
    let feature = response.features.into_iter().next()?;

    let path = feature
        .geometry
        .as_ref()
        .map(|g| g.vertices())
        .unwrap_or_default();
    if path.len() < 2 {
        return None;
    }

    let distance_km = feature.properties.distance.unwrap_or(0.0) / 1000.0;
    let time_min = feature.properties.time.unwrap_or(0.0) / 60.0;

    let legs: Vec<RouteLeg> = feature
        .properties
        .legs
        .iter()
        .flat_map(|leg| &leg.steps)
        .map(|step| RouteLeg {
            instruction: step
                .instruction
                .as_ref()
                .and_then(|i| i.text.clone())
                .unwrap_or_else(|| "Continue".to_string()),
            mode: TravelMode::Ride,
            distance_m: step.distance.unwrap_or(0.0),
            duration_s: step.time.unwrap_or(0.0),
            waypoints: (
                step.from_index.unwrap_or(0),
                step.to_index.unwrap_or(0),
            ),
        })
        .collect();

    let category = RouteCategory::Fastest;
    Some(Itinerary {
        id: next_itinerary_id(),
        total_time_min: time_min,
        total_distance_km: distance_km,
        total_cost: estimate_fare(distance_km),
        path,
        legs,
        category,
        labels: vec![category.label().to_string()],
    })
}
