//! Itinerary assembly from a terminal path.

use crate::domain::{Itinerary, Metric, RouteLeg, TravelMode, next_itinerary_id};
use crate::graph::{NodeIndex, TransitGraph};

/// Convert an ordered terminal path into a full itinerary.
///
/// Per consecutive pair, the first matching outgoing edge supplies the leg
/// weights. Totals sum the raw km/min/cost values; the legs carry the
/// meter/second conversions. Returns `None` only for malformed input (an
/// index outside the arena, or a pair with no connecting edge), which the
/// pathfinder never produces.
pub fn assemble(graph: &TransitGraph, node_path: &[NodeIndex], metric: Metric) -> Option<Itinerary> {
    let mut path = Vec::with_capacity(node_path.len());
    for index in node_path {
        path.push(graph.terminal(*index)?.position);
    }
    if path.len() < 2 {
        return None;
    }

    let mut legs: Vec<RouteLeg> = Vec::with_capacity(node_path.len() - 1);
    let mut total_km = 0.0;
    let mut total_min = 0.0;
    let mut total_cost = 0.0;

    for pair in node_path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let edge = graph.outgoing(from).iter().find(|e| e.target == to)?;
        let destination = graph.terminal(to)?;

        let instruction = match edge.mode {
            TravelMode::Walk => format!("Walk to {}", destination.name),
            TravelMode::Ride => format!(
                "Ride {} to {}",
                edge.vehicle.as_deref().unwrap_or("jeep"),
                destination.name
            ),
        };

        let position = legs.len();
        legs.push(RouteLeg {
            instruction,
            mode: edge.mode,
            distance_m: edge.distance_km * 1000.0,
            duration_s: edge.time_min * 60.0,
            waypoints: (position, position + 1),
        });

        total_km += edge.distance_km;
        total_min += edge.time_min;
        total_cost += edge.cost;
    }

    let category = metric.category();
    Some(Itinerary {
        id: next_itinerary_id(),
        total_time_min: total_min,
        total_distance_km: total_km,
        total_cost,
        path,
        legs,
        category,
        labels: vec![category.label().to_string()],
    })
}
