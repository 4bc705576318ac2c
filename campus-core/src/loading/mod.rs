//! This module is responsible for loading the node and edge data files
//! and building an immutable [`CampusModel`](crate::model::CampusModel).

mod builder;
mod config;
mod records;

pub use builder::create_campus_model;
pub use config::CampusModelConfig;
pub use records::{EdgeRecord, NodeRecord};
