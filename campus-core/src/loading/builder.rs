use hashbrown::HashMap;
use log::info;

use crate::Error;
use crate::model::{CampusModel, CampusPoint, WeightedGraph};

use super::config::CampusModelConfig;
use super::records::{EdgeRecord, NodeRecord, read_records};

/// Creates a campus model from the configured node and edge files.
///
/// Edge weights are the Euclidean distance between the endpoints'
/// coordinates, installed in both directions.
///
/// # Errors
///
/// Returns an error if either file is missing or malformed, or if an
/// edge references a node id the node file never declared. Nothing of a
/// failed load is retained.
pub fn create_campus_model(config: &CampusModelConfig) -> Result<CampusModel, Error> {
    validate_config(config)?;

    info!("Loading campus nodes: {}", config.node_path.display());
    let node_records: Vec<NodeRecord> = read_records(&config.node_path)?;

    info!("Loading campus edges: {}", config.edge_path.display());
    let edge_records: Vec<EdgeRecord> = read_records(&config.edge_path)?;

    let mut graph = WeightedGraph::new();
    let mut points: HashMap<String, CampusPoint> = HashMap::with_capacity(node_records.len());
    let mut name_id: HashMap<String, String> = HashMap::new();

    for record in node_records {
        let point = CampusPoint::new(record.name, record.id, record.x, record.y);
        graph.add_node(&point.id)?;
        if !point.name.is_empty() {
            name_id.insert(point.name.clone(), point.id.clone());
        }
        points.insert(point.id.clone(), point);
    }

    for record in edge_records {
        let distance = edge_distance(&points, &record)?;
        graph.set_edge(&record.from, &record.to, distance);
        graph.set_edge(&record.to, &record.from, distance);
    }

    info!(
        "Campus model loaded: {} nodes, {} buildings",
        graph.node_count(),
        name_id.len()
    );
    Ok(CampusModel::new(graph, points, name_id))
}

fn edge_distance(
    points: &HashMap<String, CampusPoint>,
    record: &EdgeRecord,
) -> Result<f64, Error> {
    let from = points
        .get(&record.from)
        .ok_or_else(|| unknown_endpoint(&record.from))?;
    let to = points
        .get(&record.to)
        .ok_or_else(|| unknown_endpoint(&record.to))?;
    Ok(from.distance(to))
}

fn unknown_endpoint(id: &str) -> Error {
    Error::InvalidData(format!("edge references unknown node id: {id}"))
}

fn validate_config(config: &CampusModelConfig) -> Result<(), Error> {
    if !config.node_path.exists() {
        return Err(Error::InvalidData(format!(
            "node file not found: {}",
            config.node_path.display()
        )));
    }
    if !config.edge_path.exists() {
        return Err(Error::InvalidData(format!(
            "edge file not found: {}",
            config.edge_path.display()
        )));
    }
    Ok(())
}
