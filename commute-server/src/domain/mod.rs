//! Domain types for the commute planner.
//!
//! Plain value types shared by the graph, the planner, and the geocoding
//! gateway. Behavior lives in the modules that consume them.

mod geo;
mod itinerary;
mod mode;

pub use geo::LatLng;
pub use itinerary::{Itinerary, RouteLeg, next_itinerary_id};
pub use mode::{Metric, RouteCategory, TerminalKind, TravelMode};
