//! Dijkstra shortest-path search over a [`WeightedGraph`]

use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::{HashMap, HashSet};

use crate::{Error, model::WeightedGraph};

/// Output of one shortest-path query.
///
/// `distance` covers every node of the graph; unreached nodes stay at
/// `f64::INFINITY`. `predecessor` maps each relaxed node to the neighbor
/// it was best reached from together with the edge cost used, which is
/// enough to rebuild exactly one shortest path.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub distance: HashMap<String, f64>,
    pub predecessor: HashMap<String, (String, f64)>,
}

impl SearchResult {
    pub fn distance_to(&self, node: &str) -> f64 {
        self.distance.get(node).copied().unwrap_or(f64::INFINITY)
    }
}

#[derive(Clone, Copy)]
struct State<'a> {
    cost: f64,
    node: &'a str,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap), then by
// node id so that equal-distance extractions happen in lexicographic
// order. The ordering must stay deterministic for reproducible output.
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}

/// Runs Dijkstra's algorithm from `source`, stopping once `target` is
/// finalized. A node may be enqueued several times with improving
/// distances; only its first extraction counts.
///
/// With `inverse_weights` set, each edge costs `1.0 / weight` instead of
/// the stored weight, so well-traveled (high-weight) edges are preferred.
///
/// # Errors
///
/// Returns an error if `source` is not a node of `graph`.
pub fn shortest_path<'g>(
    graph: &'g WeightedGraph,
    source: &'g str,
    target: &str,
    inverse_weights: bool,
) -> Result<SearchResult, Error> {
    if !graph.contains_node(source) {
        return Err(Error::NodeNotFound(source.to_owned()));
    }

    let mut distance: HashMap<String, f64> = graph
        .nodes()
        .map(|id| (id.to_owned(), f64::INFINITY))
        .collect();
    distance.insert(source.to_owned(), 0.0);

    let mut predecessor: HashMap<String, (String, f64)> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.node_count());
    let mut frontier = BinaryHeap::new();
    frontier.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = frontier.pop() {
        // Stale queue entries for already-finalized nodes are skipped
        if !visited.insert(node) {
            continue;
        }

        // All weights are non-negative, so the target is final here
        if node == target {
            break;
        }

        for child in graph.children(node)? {
            if visited.contains(child) {
                continue;
            }
            // children() only yields positive-weight entries
            let Some(weight) = graph.edge(node, child)? else {
                continue;
            };
            let edge_cost = if inverse_weights { 1.0 / weight } else { weight };
            let next_cost = cost + edge_cost;
            if next_cost < distance.get(child).copied().unwrap_or(f64::INFINITY) {
                distance.insert(child.to_owned(), next_cost);
                predecessor.insert(child.to_owned(), (node.to_owned(), edge_cost));
                frontier.push(State {
                    cost: next_cost,
                    node: child,
                });
            }
        }
    }

    Ok(SearchResult {
        distance,
        predecessor,
    })
}
