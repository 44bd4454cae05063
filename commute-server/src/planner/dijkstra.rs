//! Metric-parameterized shortest-path search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::{Itinerary, LatLng, Metric};
use crate::graph::{NodeIndex, TransitEdge, TransitGraph};

use super::assemble::assemble;

/// Heap entry ordered by tentative weight, then node index.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed. Weights come
/// from edge tables and are never NaN; equal weights fall back to the node
/// index so repeated runs pop in the same order.
#[derive(Debug, PartialEq)]
struct QueueEntry {
    weight: f64,
    node: NodeIndex,
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

fn edge_weight(edge: &TransitEdge, metric: Metric) -> f64 {
    match metric {
        Metric::Time => edge.time_min,
        Metric::Distance => edge.distance_km,
        Metric::Cost => edge.cost,
    }
}

/// Compute the best itinerary between two raw coordinates.
///
/// Both endpoints snap to their nearest terminal first. Returns `None` when
/// either endpoint has no terminal to snap to, when both snap to the same
/// terminal, or when the graph offers no connecting path. "No route" is an
/// expected outcome, not an error.
pub fn shortest_path(
    graph: &TransitGraph,
    start: LatLng,
    end: LatLng,
    metric: Metric,
) -> Option<Itinerary> {
    let from = graph.nearest_node(start)?;
    let to = graph.nearest_node(end)?;

    // Identical endpoints are a degenerate request, not a zero-length route.
    if from == to {
        return None;
    }

    let node_path = search(graph, from, to, metric)?;
    assemble(graph, &node_path, metric)
}

/// Dijkstra over the arena, returning the terminal path from `from` to `to`.
///
/// Lazy-deletion binary heap; parallel edges are not deduplicated, the
/// first one offering a strictly smaller tentative distance wins. With
/// non-negative weights this selects the same paths as a scan-based
/// minimum selection.
fn search(
    graph: &TransitGraph,
    from: NodeIndex,
    to: NodeIndex,
    metric: Metric,
) -> Option<Vec<NodeIndex>> {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];

    let mut heap = BinaryHeap::new();
    dist[from.0] = 0.0;
    heap.push(QueueEntry {
        weight: 0.0,
        node: from,
    });

    while let Some(entry) = heap.pop() {
        let node = entry.node;
        if visited[node.0] {
            continue;
        }
        visited[node.0] = true;

        if node == to {
            break;
        }

        for edge in graph.outgoing(node) {
            let next = dist[node.0] + edge_weight(edge, metric);
            if next < dist[edge.target.0] {
                dist[edge.target.0] = next;
                prev[edge.target.0] = Some(node);
                heap.push(QueueEntry {
                    weight: next,
                    node: edge.target,
                });
            }
        }
    }

    // Walk predecessors back from the end; an incomplete chain means the
    // graph never reached it.
    let mut path = vec![to];
    let mut current = to;
    while let Some(p) = prev[current.0] {
        current = p;
        path.push(current);
    }
    path.reverse();

    if path.first() != Some(&from) {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteCategory, TerminalKind, TravelMode};
    use crate::graph::{EdgeWeights, Terminal, district_graph};

    fn terminal(id: &str, lat: f64, lng: f64) -> Terminal {
        Terminal {
            id: id.to_string(),
            name: id.to_string(),
            address: String::new(),
            position: LatLng::new(lat, lng),
            kind: TerminalKind::Mixed,
        }
    }

    fn ride(km: f64, min: f64, cost: f64) -> EdgeWeights {
        EdgeWeights {
            distance_km: km,
            time_min: min,
            cost,
            mode: TravelMode::Ride,
            vehicle: Some("jeep".to_string()),
        }
    }

    /// Line graph a → b → c → d with an expensive shortcut a → d.
    fn line_graph() -> TransitGraph {
        let mut g = TransitGraph::new();
        g.add_terminal(terminal("a", 14.60, 121.00)).unwrap();
        g.add_terminal(terminal("b", 14.61, 121.01)).unwrap();
        g.add_terminal(terminal("c", 14.62, 121.02)).unwrap();
        g.add_terminal(terminal("d", 14.63, 121.03)).unwrap();
        g.add_edge("a", "b", ride(1.0, 5.0, 13.0)).unwrap();
        g.add_edge("b", "c", ride(1.0, 5.0, 13.0)).unwrap();
        g.add_edge("c", "d", ride(1.0, 5.0, 13.0)).unwrap();
        g.add_edge("a", "d", ride(5.0, 30.0, 13.0)).unwrap();
        g
    }

    fn ids(graph: &TransitGraph, itinerary: &Itinerary) -> Vec<String> {
        itinerary
            .path
            .iter()
            .map(|p| {
                let ix = graph.nearest_node(*p).unwrap();
                graph.terminal(ix).unwrap().id.clone()
            })
            .collect()
    }

    /// Reference shortest-path weight, for the optimality property.
    fn bellman_ford(graph: &TransitGraph, from: NodeIndex, to: NodeIndex, metric: Metric) -> Option<f64> {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        dist[from.0] = 0.0;

        for _ in 0..n {
            let mut changed = false;
            for u in 0..n {
                if !dist[u].is_finite() {
                    continue;
                }
                for edge in graph.outgoing(NodeIndex(u)) {
                    let next = dist[u] + edge_weight(edge, metric);
                    if next < dist[edge.target.0] {
                        dist[edge.target.0] = next;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        dist[to.0].is_finite().then_some(dist[to.0])
    }

    #[test]
    fn picks_the_cheaper_multi_hop_path() {
        let g = line_graph();
        let route = shortest_path(
            &g,
            LatLng::new(14.60, 121.00),
            LatLng::new(14.63, 121.03),
            Metric::Time,
        )
        .unwrap();

        assert_eq!(ids(&g, &route), vec!["a", "b", "c", "d"]);
        assert_eq!(route.total_time_min, 15.0);
    }

    #[test]
    fn metric_changes_the_winner() {
        // By distance the direct hop loses; make it win on cost.
        let mut g = TransitGraph::new();
        g.add_terminal(terminal("a", 14.60, 121.00)).unwrap();
        g.add_terminal(terminal("b", 14.61, 121.01)).unwrap();
        g.add_terminal(terminal("c", 14.62, 121.02)).unwrap();
        g.add_edge("a", "b", ride(1.0, 5.0, 13.0)).unwrap();
        g.add_edge("b", "c", ride(1.0, 5.0, 13.0)).unwrap();
        g.add_edge("a", "c", ride(4.0, 25.0, 13.0)).unwrap();

        let start = LatLng::new(14.60, 121.00);
        let end = LatLng::new(14.62, 121.02);

        let by_distance = shortest_path(&g, start, end, Metric::Distance).unwrap();
        assert_eq!(ids(&g, &by_distance), vec!["a", "b", "c"]);

        let by_cost = shortest_path(&g, start, end, Metric::Cost).unwrap();
        assert_eq!(ids(&g, &by_cost), vec!["a", "c"]);
        assert_eq!(by_cost.total_cost, 13.0);
    }

    #[test]
    fn matches_bellman_ford_on_the_district_graph() {
        let g = district_graph();
        let probes = [
            ("ts_palengke", "technohub"),
            ("ts_palengke", "qc_hall"),
            ("sm_north", "up_campus"),
            ("parks_wildlife", "visayas_ave"),
        ];

        for (from_id, to_id) in probes {
            let from = g.index_of(from_id).unwrap();
            let to = g.index_of(to_id).unwrap();
            let start = g.terminal(from).unwrap().position;
            let end = g.terminal(to).unwrap().position;

            for metric in [Metric::Time, Metric::Distance, Metric::Cost] {
                let route = shortest_path(&g, start, end, metric)
                    .unwrap_or_else(|| panic!("no route {from_id} -> {to_id}"));
                let expected = bellman_ford(&g, from, to, metric).unwrap();
                let actual = match metric {
                    Metric::Time => route.total_time_min,
                    Metric::Distance => route.total_distance_km,
                    Metric::Cost => route.total_cost,
                };
                assert!(
                    (actual - expected).abs() < 1e-9,
                    "{from_id} -> {to_id} by {metric:?}: got {actual}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let g = district_graph();
        let start = LatLng::new(14.6745, 121.0355);
        let end = LatLng::new(14.6570, 121.0585);

        let first = shortest_path(&g, start, end, Metric::Time).unwrap();
        let second = shortest_path(&g, start, end, Metric::Time).unwrap();

        // Ids are allowed to differ; everything else must match.
        assert_eq!(first.path, second.path);
        assert_eq!(first.legs, second.legs);
        assert_eq!(first.total_time_min, second.total_time_min);
        assert_eq!(first.total_distance_km, second.total_distance_km);
        assert_eq!(first.total_cost, second.total_cost);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn same_terminal_for_both_endpoints_is_no_route() {
        let g = district_graph();
        let point = LatLng::new(14.6741, 121.0359);

        assert!(shortest_path(&g, point, point, Metric::Time).is_none());
    }

    #[test]
    fn empty_graph_is_no_route() {
        let g = TransitGraph::new();
        let route = shortest_path(
            &g,
            LatLng::new(14.0, 121.0),
            LatLng::new(14.1, 121.1),
            Metric::Time,
        );
        assert!(route.is_none());
    }

    #[test]
    fn disconnected_terminals_are_no_route() {
        let mut g = TransitGraph::new();
        g.add_terminal(terminal("a", 14.60, 121.00)).unwrap();
        g.add_terminal(terminal("b", 14.61, 121.01)).unwrap();
        g.add_terminal(terminal("island", 14.90, 121.30)).unwrap();
        g.add_edge("a", "b", ride(1.0, 5.0, 13.0)).unwrap();

        let route = shortest_path(
            &g,
            LatLng::new(14.60, 121.00),
            LatLng::new(14.90, 121.30),
            Metric::Time,
        );
        assert!(route.is_none());
    }

    #[test]
    fn edges_are_one_way_for_the_search() {
        let mut g = TransitGraph::new();
        g.add_terminal(terminal("a", 14.60, 121.00)).unwrap();
        g.add_terminal(terminal("b", 14.61, 121.01)).unwrap();
        g.add_edge("a", "b", ride(1.0, 5.0, 13.0)).unwrap();

        let forward = shortest_path(
            &g,
            LatLng::new(14.60, 121.00),
            LatLng::new(14.61, 121.01),
            Metric::Time,
        );
        assert!(forward.is_some());

        let backward = shortest_path(
            &g,
            LatLng::new(14.61, 121.01),
            LatLng::new(14.60, 121.00),
            Metric::Time,
        );
        assert!(backward.is_none());
    }

    #[test]
    fn parallel_edge_with_smaller_weight_wins_the_relaxation() {
        let mut g = TransitGraph::new();
        g.add_terminal(terminal("a", 14.60, 121.00)).unwrap();
        g.add_terminal(terminal("b", 14.61, 121.01)).unwrap();
        g.add_terminal(terminal("c", 14.62, 121.02)).unwrap();
        // Two parallel edges a → c; the second is the fast one.
        g.add_edge("a", "c", ride(1.0, 10.0, 13.0)).unwrap();
        g.add_edge("a", "c", ride(1.0, 3.0, 13.0)).unwrap();
        // Detour a → b → c totals 4 minutes, slower than the fast parallel edge.
        g.add_edge("a", "b", ride(1.0, 2.0, 13.0)).unwrap();
        g.add_edge("b", "c", ride(1.0, 2.0, 13.0)).unwrap();

        let route = shortest_path(
            &g,
            LatLng::new(14.60, 121.00),
            LatLng::new(14.62, 121.02),
            Metric::Time,
        )
        .unwrap();

        // The direct hop won, so the path skips b entirely.
        assert_eq!(ids(&g, &route), vec!["a", "c"]);
    }

    #[test]
    fn district_scenario_by_time() {
        let g = district_graph();
        let route = shortest_path(
            &g,
            LatLng::new(14.6745, 121.0355),
            LatLng::new(14.6570, 121.0585),
            Metric::Time,
        )
        .unwrap();

        assert_eq!(ids(&g, &route), vec!["ts_palengke", "visayas_ave", "technohub"]);
        assert_eq!(route.total_time_min, 40.0);
        assert_eq!(route.total_cost, 33.0);
        assert_eq!(route.total_distance_km, 5.0);
        assert_eq!(route.category, RouteCategory::Fastest);
        assert_eq!(route.legs.len(), 2);
    }

    #[test]
    fn district_scenario_by_cost_takes_philcoa() {
        let g = district_graph();
        let route = shortest_path(
            &g,
            LatLng::new(14.6745, 121.0355),
            LatLng::new(14.6570, 121.0585),
            Metric::Cost,
        )
        .unwrap();

        assert_eq!(ids(&g, &route), vec!["ts_palengke", "philcoa", "technohub"]);
        assert_eq!(route.total_cost, 26.0);
        assert_eq!(route.category, RouteCategory::Cheapest);
    }
}
