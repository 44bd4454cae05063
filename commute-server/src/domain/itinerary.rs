//! Computed trip plans.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{LatLng, RouteCategory, TravelMode};

static ITINERARY_SEQ: AtomicU64 = AtomicU64::new(0);

/// Allocate a process-unique itinerary id.
///
/// Timestamp plus a process-wide counter: two computations never share an id
/// within one process lifetime, even inside the same millisecond.
pub fn next_itinerary_id() -> String {
    let seq = ITINERARY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("itn-{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}

/// One instruction-level step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    /// Human-readable instruction, e.g. "Ride jeep to Philcoa Terminal".
    pub instruction: String,

    /// Whether this leg is walked or ridden.
    pub mode: TravelMode,

    /// Leg length in meters.
    pub distance_m: f64,

    /// Leg duration in seconds.
    pub duration_s: f64,

    /// Start and end positions of this leg within `Itinerary::path`.
    pub waypoints: (usize, usize),
}

/// A fully computed trip plan.
///
/// Produced fresh per request and never mutated afterwards; the caller that
/// requested it owns it outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Opaque id, unique per computation within the process lifetime.
    pub id: String,

    /// Total travel time in minutes.
    pub total_time_min: f64,

    /// Total travel distance in kilometers.
    pub total_distance_km: f64,

    /// Total fare in pesos.
    pub total_cost: f64,

    /// Ordered polyline of the route. At least two points.
    pub path: Vec<LatLng>,

    /// Ordered per-segment instructions.
    pub legs: Vec<RouteLeg>,

    /// Which presentation this itinerary carries.
    pub category: RouteCategory,

    /// Display labels mirroring the category.
    pub labels: Vec<String>,
}
