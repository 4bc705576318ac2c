use std::path::PathBuf;

/// Paths to the two campus data files.
#[derive(Debug, Clone)]
pub struct CampusModelConfig {
    /// Headerless CSV of `name,id,x,y` rows; an empty name marks an
    /// unnamed path intersection
    pub node_path: PathBuf,
    /// Headerless CSV of `id,id` rows, each a bidirectional walking path
    pub edge_path: PathBuf,
}

impl CampusModelConfig {
    pub fn new(node_path: impl Into<PathBuf>, edge_path: impl Into<PathBuf>) -> Self {
        Self {
            node_path: node_path.into(),
            edge_path: edge_path.into(),
        }
    }
}
