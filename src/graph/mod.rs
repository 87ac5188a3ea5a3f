//! Street graph: vertices, undirected adjacency and nearest-vertex search.

mod nearest;
mod spatial_graph;
mod vertex;

pub use nearest::NearestVertexFinder;
pub use spatial_graph::SpatialGraph;
pub use vertex::{Vertex, VertexId};
