use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
