//! Data model for the campus walking network
//!
//! Contains the map points, the weighted adjacency graph and the
//! top-level [`CampusModel`] that owns both.

pub mod campus;
pub mod graph;
pub mod point;

pub use campus::CampusModel;
pub use graph::WeightedGraph;
pub use point::CampusPoint;
