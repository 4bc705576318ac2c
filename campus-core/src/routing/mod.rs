//! Shortest-path search and itinerary rendering

pub mod dijkstra;
pub mod itinerary;

pub use dijkstra::{SearchResult, shortest_path};
pub use itinerary::{CompassDirection, RouteResult, RouteStep, render_route};
