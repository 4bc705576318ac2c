// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{CampusModelConfig, create_campus_model};
pub use crate::model::{CampusModel, CampusPoint, WeightedGraph};
pub use crate::routing::{
    CompassDirection, RouteResult, RouteStep, SearchResult, render_route, shortest_path,
};
