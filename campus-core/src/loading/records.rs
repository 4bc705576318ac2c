use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::Error;

/// One row of the node data file. Fields are positional; the files carry
/// no header row.
#[derive(Debug, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// One row of the edge data file: a bidirectional path between two node
/// ids.
#[derive(Debug, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
}

/// Deserializes a whole headerless CSV file. Any malformed row (wrong
/// field count, non-numeric coordinate) fails the load; no partial data
/// escapes.
pub(super) fn read_records<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> Deserialize<'de>,
{
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(Error::from)
}
