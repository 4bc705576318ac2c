//! Weighted adjacency-map graph over string node ids

use hashbrown::{HashMap, HashSet};

use crate::Error;

/// Directed graph stored as a map from node id to its outgoing edges.
///
/// An undirected walking path is modeled by installing both directions
/// with equal weight. Two edge-mutation operations coexist: [`add_edge`]
/// counts parallel edges (1.0 per call), while [`set_edge`] overwrites
/// the weight with a metric distance.
///
/// [`add_edge`]: WeightedGraph::add_edge
/// [`set_edge`]: WeightedGraph::set_edge
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: HashMap<String, HashMap<String, f64>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Inserts every id that is not already present, each with an empty
    /// adjacency set. Existing nodes keep their edges.
    pub fn add_nodes<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.adjacency.entry(id.into()).or_default();
        }
    }

    /// Adds a single node. Returns `Ok(false)` without mutation if the id
    /// is already present.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is empty.
    pub fn add_node(&mut self, id: &str) -> Result<bool, Error> {
        if id.is_empty() {
            return Err(Error::InvalidData("node id must not be empty".to_string()));
        }
        if self.adjacency.contains_key(id) {
            return Ok(false);
        }
        self.adjacency.insert(id.to_owned(), HashMap::new());
        Ok(true)
    }

    /// Records one more parallel edge from `parent` to `child`: the weight
    /// starts at 1.0 and grows by 1.0 per repeated call. Returns `false`
    /// without mutation if either endpoint is absent.
    pub fn add_edge(&mut self, parent: &str, child: &str) -> bool {
        if !self.adjacency.contains_key(child) {
            return false;
        }
        let Some(children) = self.adjacency.get_mut(parent) else {
            return false;
        };
        children
            .entry(child.to_owned())
            .and_modify(|w| *w += 1.0)
            .or_insert(1.0);
        true
    }

    /// Overwrites the directed weight from `parent` to `child`
    /// unconditionally. Returns `false` without mutation if either
    /// endpoint is absent.
    pub fn set_edge(&mut self, parent: &str, child: &str, weight: f64) -> bool {
        if !self.adjacency.contains_key(child) {
            return false;
        }
        let Some(children) = self.adjacency.get_mut(parent) else {
            return false;
        };
        children.insert(child.to_owned(), weight);
        true
    }

    /// Current weight of the directed edge, or `None` if `parent` has no
    /// edge to `child`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not a node of this graph.
    pub fn edge(&self, parent: &str, child: &str) -> Result<Option<f64>, Error> {
        let children = self
            .adjacency
            .get(parent)
            .ok_or_else(|| Error::NodeNotFound(parent.to_owned()))?;
        Ok(children.get(child).copied())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// All children of `parent` reachable over a strictly positive weight.
    /// Zero- and negative-weight entries count as "no traversable edge".
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not a node of this graph.
    pub fn children(&self, parent: &str) -> Result<HashSet<&str>, Error> {
        let children = self
            .adjacency
            .get(parent)
            .ok_or_else(|| Error::NodeNotFound(parent.to_owned()))?;
        Ok(children
            .iter()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(id, _)| id.as_str())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_nodes(ids: &[&str]) -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        graph.add_nodes(ids.iter().copied());
        graph
    }

    #[test]
    fn add_node_rejects_duplicates_and_empty_ids() {
        let mut graph = WeightedGraph::new();
        assert!(graph.add_node("A").unwrap());
        assert!(!graph.add_node("A").unwrap());
        assert!(graph.add_node("").is_err());
        assert!(graph.contains_node("A"));
    }

    #[test]
    fn add_nodes_is_idempotent_and_keeps_edges() {
        let mut graph = graph_with_nodes(&["A", "B"]);
        assert!(graph.set_edge("A", "B", 2.5));
        graph.add_nodes(["A", "B", "C"]);
        assert_eq!(graph.edge("A", "B").unwrap(), Some(2.5));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn add_edge_accumulates_parallel_edges() {
        let mut graph = graph_with_nodes(&["A", "B"]);
        assert!(graph.add_edge("A", "B"));
        assert!(graph.add_edge("A", "B"));
        assert_eq!(graph.edge("A", "B").unwrap(), Some(2.0));
        // directed: the reverse edge was never installed
        assert_eq!(graph.edge("B", "A").unwrap(), None);
    }

    #[test]
    fn set_edge_overwrites_any_prior_weight() {
        let mut graph = graph_with_nodes(&["A", "B"]);
        assert!(graph.add_edge("A", "B"));
        assert!(graph.set_edge("A", "B", 7.25));
        assert_eq!(graph.edge("A", "B").unwrap(), Some(7.25));
        assert!(graph.set_edge("A", "B", 1.0));
        assert_eq!(graph.edge("A", "B").unwrap(), Some(1.0));
    }

    #[test]
    fn edge_mutations_require_both_endpoints() {
        let mut graph = graph_with_nodes(&["A"]);
        assert!(!graph.add_edge("A", "missing"));
        assert!(!graph.set_edge("missing", "A", 1.0));
        assert!(!graph.set_edge("A", "missing", 1.0));
        assert!(graph.edge("A", "missing").unwrap().is_none());
        assert!(graph.edge("missing", "A").is_err());
    }

    #[test]
    fn children_filters_non_positive_weights() {
        let mut graph = graph_with_nodes(&["A", "B", "C", "D"]);
        graph.set_edge("A", "B", 3.0);
        graph.set_edge("A", "C", 0.0);
        graph.set_edge("A", "D", -1.5);
        let children = graph.children("A").unwrap();
        assert!(children.contains("B"));
        assert!(!children.contains("C"));
        assert!(!children.contains("D"));
        assert!(graph.children("missing").is_err());
    }
}
