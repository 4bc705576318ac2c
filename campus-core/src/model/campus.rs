//! Top-level campus model: graph, point table and name directory

use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;

use crate::Error;
use crate::model::{CampusPoint, WeightedGraph};
use crate::routing::{RouteResult, render_route, shortest_path};

/// Owns the loaded campus map and answers path queries against it.
///
/// Immutable after [`create_campus_model`] builds it, so it could be
/// shared read-only between threads; every query allocates its own
/// search state.
///
/// [`create_campus_model`]: crate::loading::create_campus_model
#[derive(Debug, Clone)]
pub struct CampusModel {
    graph: WeightedGraph,
    /// id -> point; doubles as the id -> display-name directory
    points: HashMap<String, CampusPoint>,
    /// building name -> id, names only (intersections have none)
    name_id: HashMap<String, String>,
}

impl CampusModel {
    pub(crate) fn new(
        graph: WeightedGraph,
        points: HashMap<String, CampusPoint>,
        name_id: HashMap<String, String>,
    ) -> Self {
        Self {
            graph,
            points,
            name_id,
        }
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn point(&self, id: &str) -> Option<&CampusPoint> {
        self.points.get(id)
    }

    /// Resolves a user-supplied string to a building's node id: an exact
    /// id match wins, then a building-name lookup. Ids of unnamed
    /// intersections are not valid endpoints.
    fn resolve(&self, query: &str) -> Option<&str> {
        if let Some(point) = self.points.get(query) {
            if !point.name.is_empty() {
                return Some(point.id.as_str());
            }
        }
        self.name_id.get(query).map(String::as_str)
    }

    /// True if the two strings refer to the same building, either as
    /// identical text or as an id paired with its registered name.
    fn same_building(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        if let Some(point) = self.points.get(a) {
            if point.name == b {
                return true;
            }
        }
        if let Some(point) = self.points.get(b) {
            if point.name == a {
                return true;
            }
        }
        false
    }

    /// All known buildings as `name,id` lines, sorted lexicographically.
    /// Computed fresh on every call; the order is total and stable.
    pub fn list_buildings(&self) -> Vec<String> {
        self.name_id
            .iter()
            .map(|(name, id)| format!("{name},{id}"))
            .sorted()
            .collect()
    }

    /// Answers one path query between two building names or ids.
    ///
    /// Unresolvable endpoints short-circuit into
    /// [`RouteResult::UnknownBuildings`] without running a search; when
    /// both inputs name the same unknown building it is reported once.
    ///
    /// # Errors
    ///
    /// Propagates graph-level failures from the search. These indicate a
    /// model inconsistency, not bad user input, and do not occur once
    /// both endpoints resolve.
    pub fn find_path(&self, from: &str, to: &str) -> Result<RouteResult, Error> {
        let (source, target) = match (self.resolve(from), self.resolve(to)) {
            (Some(source), Some(target)) => (source, target),
            (source, target) => {
                let mut unknown = Vec::new();
                if source.is_none() {
                    unknown.push(from.to_owned());
                }
                if target.is_none() && !self.same_building(to, from) {
                    unknown.push(to.to_owned());
                }
                return Ok(RouteResult::UnknownBuildings(unknown));
            }
        };

        debug!("Routing {source} -> {target}");
        let search = shortest_path(&self.graph, source, target, false)?;
        Ok(render_route(source, target, &search, &self.points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> CampusModel {
        let mut graph = WeightedGraph::new();
        graph.add_nodes(["UN", "LIB", "I1"]);
        graph.set_edge("UN", "LIB", 10.0);
        graph.set_edge("LIB", "UN", 10.0);

        let mut points = HashMap::new();
        points.insert("UN".to_string(), CampusPoint::new("Union", "UN", 0.0, 0.0));
        points.insert("LIB".to_string(), CampusPoint::new("Library", "LIB", 0.0, 10.0));
        points.insert("I1".to_string(), CampusPoint::new("", "I1", 5.0, 5.0));

        let mut name_id = HashMap::new();
        name_id.insert("Union".to_string(), "UN".to_string());
        name_id.insert("Library".to_string(), "LIB".to_string());

        CampusModel::new(graph, points, name_id)
    }

    #[test]
    fn resolves_ids_and_names() {
        let model = sample_model();
        assert_eq!(model.resolve("UN"), Some("UN"));
        assert_eq!(model.resolve("Union"), Some("UN"));
        assert_eq!(model.resolve("Nowhere"), None);
        // intersection ids are not buildings
        assert_eq!(model.resolve("I1"), None);
    }

    #[test]
    fn same_building_matches_id_and_name() {
        let model = sample_model();
        assert!(model.same_building("UN", "UN"));
        assert!(model.same_building("UN", "Union"));
        assert!(model.same_building("Union", "UN"));
        assert!(!model.same_building("UN", "Library"));
    }

    #[test]
    fn unknown_endpoints_are_reported_without_searching() {
        let model = sample_model();
        let result = model.find_path("Union", "Nowhere").unwrap();
        assert_eq!(
            result,
            RouteResult::UnknownBuildings(vec!["Nowhere".to_string()])
        );

        let result = model.find_path("Here", "There").unwrap();
        assert_eq!(
            result,
            RouteResult::UnknownBuildings(vec!["Here".to_string(), "There".to_string()])
        );
    }

    #[test]
    fn duplicate_unknown_building_is_reported_once() {
        let model = sample_model();
        let result = model.find_path("Nowhere", "Nowhere").unwrap();
        assert_eq!(
            result,
            RouteResult::UnknownBuildings(vec!["Nowhere".to_string()])
        );
    }

    #[test]
    fn list_buildings_is_sorted_and_stable() {
        let model = sample_model();
        let expected = vec!["Library,LIB".to_string(), "Union,UN".to_string()];
        assert_eq!(model.list_buildings(), expected);
        assert_eq!(model.list_buildings(), expected);
    }

    #[test]
    fn path_between_named_buildings() {
        let model = sample_model();
        let result = model.find_path("Union", "Library").unwrap();
        assert_eq!(
            result.to_string(),
            "Path from Union to Library:\n\
             \tWalk South to (Library)\n\
             Total distance: 10.000 pixel units."
        );
    }
}
