//! Error types for rastermap.

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasterMapError>;

#[derive(Debug, Error)]
pub enum RasterMapError {
    /// Query box is malformed or encloses the whole dataset
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// Nearest-vertex search on a graph with no active vertices
    #[error("Graph has no active vertices")]
    EmptyGraph,

    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    #[error("Vertex {0} already exists")]
    DuplicateVertex(VertexId),

    /// Ingestion calls arrived out of order
    #[error("Build order violation: {0}")]
    BuildOrder(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RasterMapError {
    fn from(err: serde_json::Error) -> Self {
        RasterMapError::Serialization(err.to_string())
    }
}

impl From<rastermap_types::bbox::ParamError> for RasterMapError {
    fn from(err: rastermap_types::bbox::ParamError) -> Self {
        RasterMapError::InvalidInput(err.to_string())
    }
}
