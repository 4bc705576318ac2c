//! Shortest walking routes between named locations on a campus map.
//!
//! The crate loads two CSV files (nodes and bidirectional edges), builds
//! a weighted graph with Euclidean edge lengths, and answers queries
//! with turn-by-turn compass directions.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{CampusModelConfig, create_campus_model};
pub use model::{CampusModel, CampusPoint, WeightedGraph};
pub use routing::{CompassDirection, RouteResult, RouteStep, SearchResult, shortest_path};
