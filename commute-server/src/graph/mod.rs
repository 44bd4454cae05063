//! Arena-backed transit graph.
//!
//! Terminals live in a dense vector and edges address their targets by
//! index, so the pathfinder's hot loop never hashes a string. The id map is
//! built once at load time and serves external lookups only.

mod district;

pub use district::district_graph;

use std::collections::HashMap;

use crate::domain::{LatLng, TerminalKind, TravelMode};

/// Index of a terminal in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);

/// A fixed, named transit point (jeepney/bus/tricycle stop).
#[derive(Debug, Clone)]
pub struct Terminal {
    /// Stable external id, e.g. "ts_palengke".
    pub id: String,

    /// Display name shown in instructions.
    pub name: String,

    /// Street address.
    pub address: String,

    /// Geographic position.
    pub position: LatLng,

    /// Which vehicles serve this terminal.
    pub kind: TerminalKind,
}

/// A directed, weighted connection between two terminals.
///
/// Each weight dimension is independent; the pathfinder's metric decides
/// which one drives the search. An edge A→B does not imply B→A exists.
#[derive(Debug, Clone)]
pub struct TransitEdge {
    pub target: NodeIndex,
    pub distance_km: f64,
    pub time_min: f64,
    pub cost: f64,
    pub mode: TravelMode,
    /// Vehicle kind for ride edges ("jeep", "tricycle", ...).
    pub vehicle: Option<String>,
}

/// Edge weights supplied when wiring the graph; the target index is
/// resolved from the terminal id at insertion time.
#[derive(Debug, Clone)]
pub struct EdgeWeights {
    pub distance_km: f64,
    pub time_min: f64,
    pub cost: f64,
    pub mode: TravelMode,
    pub vehicle: Option<String>,
}

/// Errors from graph construction.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("unknown terminal id: {0}")]
    UnknownTerminal(String),

    #[error("duplicate terminal id: {0}")]
    DuplicateTerminal(String),
}

/// The static district transit graph.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Default)]
pub struct TransitGraph {
    nodes: Vec<Terminal>,
    edges: Vec<Vec<TransitEdge>>,
    id_lookup: HashMap<String, NodeIndex>,
}

impl TransitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a terminal. Ids must be unique.
    pub fn add_terminal(&mut self, terminal: Terminal) -> Result<NodeIndex, GraphError> {
        if self.id_lookup.contains_key(&terminal.id) {
            return Err(GraphError::DuplicateTerminal(terminal.id.clone()));
        }

        let index = NodeIndex(self.nodes.len());
        self.id_lookup.insert(terminal.id.clone(), index);
        self.nodes.push(terminal);
        self.edges.push(Vec::new());
        Ok(index)
    }

    /// Add a directed edge between two terminals already in the graph.
    pub fn add_edge(&mut self, from: &str, to: &str, weights: EdgeWeights) -> Result<(), GraphError> {
        let from_ix = self
            .index_of(from)
            .ok_or_else(|| GraphError::UnknownTerminal(from.to_string()))?;
        let target = self
            .index_of(to)
            .ok_or_else(|| GraphError::UnknownTerminal(to.to_string()))?;

        self.edges[from_ix.0].push(TransitEdge {
            target,
            distance_km: weights.distance_km,
            time_min: weights.time_min,
            cost: weights.cost,
            mode: weights.mode,
            vehicle: weights.vehicle,
        });
        Ok(())
    }

    /// Look up a terminal's index by its external id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.id_lookup.get(id).copied()
    }

    /// Get a terminal by index.
    pub fn terminal(&self, index: NodeIndex) -> Option<&Terminal> {
        self.nodes.get(index.0)
    }

    /// Outgoing edges of a terminal, in insertion order.
    pub fn outgoing(&self, index: NodeIndex) -> &[TransitEdge] {
        self.edges.get(index.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over all terminals with their indices.
    pub fn terminals(&self) -> impl Iterator<Item = (NodeIndex, &Terminal)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, t)| (NodeIndex(i), t))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve an arbitrary coordinate to the closest terminal.
    ///
    /// Linear scan comparing squared planar lat/lng distance. Ties keep the
    /// first terminal encountered, so results are deterministic for a fixed
    /// insertion order. Returns `None` on an empty graph.
    pub fn nearest_node(&self, point: LatLng) -> Option<NodeIndex> {
        let mut best: Option<(f64, NodeIndex)> = None;

        for (i, terminal) in self.nodes.iter().enumerate() {
            let d = point.sq_dist(&terminal.position);
            if best.is_none_or(|(b, _)| d < b) {
                best = Some((d, NodeIndex(i)));
            }
        }

        best.map(|(_, index)| index)
    }
}
