//! Shortest-path planning over the district graph.
//!
//! The pathfinder snaps raw coordinates to terminals, runs a
//! metric-parameterized Dijkstra search, and hands the terminal path to the
//! assembler. The variant generator then derives the three labeled
//! presentations from one computed itinerary.

mod assemble;
mod dijkstra;
mod variants;

pub use assemble::assemble;
pub use dijkstra::shortest_path;
pub use variants::{RouteVariants, expand};
