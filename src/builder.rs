//! Index builder for the ingestion phase
//!
//! An ingestion source (an OSM parser, a test fixture) feeds vertices,
//! attributes and edges through this builder, then calls [`build`]
//! once to prune isolated vertices and index names.
//!
//! [`build`]: IndexBuilder::build

use crate::compute::validation::validate_geographic_point;
use crate::config::Config;
use crate::error::{RasterMapError, Result};
use crate::graph::{SpatialGraph, Vertex, VertexId};
use crate::location::LocationIndex;
use crate::trie::PrefixIndex;
use geo::Point;

/// Builder for a [`LocationIndex`].
///
/// All vertices must be added before the first edge.
///
/// ```rust
/// use rastermap::IndexBuilder;
///
/// let mut builder = IndexBuilder::new();
/// builder.add_vertex(1, -122.2587, 37.8756)?;
/// builder.add_vertex(2, -122.2590, 37.8760)?;
/// builder.set_attribute(1, "name", "Soda Hall")?;
/// builder.add_edge(1, 2)?;
///
/// let index = builder.build();
/// assert_eq!(index.search("soda hall")[0].vertex_id, 1);
/// # Ok::<(), rastermap::RasterMapError>(())
/// ```
#[derive(Debug)]
pub struct IndexBuilder {
    graph: SpatialGraph,
    name_key: String,
    edges_started: bool,
}

impl IndexBuilder {
    /// Create a builder indexing the default `name` attribute.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a builder that indexes `config.name_key`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            graph: SpatialGraph::new(),
            name_key: config.name_key.clone(),
            edges_started: false,
        }
    }

    /// Add a vertex at `(lon, lat)`.
    ///
    /// # Errors
    ///
    /// `BuildOrder` once edges have been added, `DuplicateVertex` for a
    /// repeated id and `InvalidInput` for out-of-range coordinates.
    pub fn add_vertex(&mut self, id: VertexId, lon: f64, lat: f64) -> Result<()> {
        if self.edges_started {
            return Err(RasterMapError::BuildOrder(format!(
                "vertex {} added after edges",
                id
            )));
        }
        if let Err(e) = validate_geographic_point(&Point::new(lon, lat)) {
            log::warn!("Rejecting vertex {} at ({}, {}): {}", id, lon, lat, e);
            return Err(e);
        }
        self.graph.add_vertex(Vertex::new(id, lon, lat))
    }

    /// Set a free-form tag on an existing vertex.
    pub fn set_attribute(&mut self, id: VertexId, key: &str, value: &str) -> Result<()> {
        self.graph.set_attribute(id, key, value)
    }

    /// Connect two existing vertices.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.edges_started = true;
        self.graph.add_edge(u, v)
    }

    /// Connect consecutive vertices of a way. Repeated consecutive ids are
    /// skipped.
    pub fn add_way(&mut self, nodes: &[VertexId]) -> Result<()> {
        for pair in nodes.windows(2) {
            if pair[0] != pair[1] {
                self.add_edge(pair[0], pair[1])?;
            }
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Prune isolated vertices, index names and freeze the result.
    pub fn build(self) -> LocationIndex {
        let mut graph = self.graph;
        let removed = graph.prune();

        let mut names = PrefixIndex::new();
        for vertex in graph.vertices().chain(removed.iter()) {
            if let Some(name) = vertex.attribute(&self.name_key) {
                names.insert(name, vertex.id);
            }
        }

        log::info!(
            "Built location index: {} active vertices, {} edges, {} pruned, {} names",
            graph.vertex_count(),
            graph.edge_count(),
            removed.len(),
            names.len()
        );

        LocationIndex::new(graph, removed, names, self.name_key)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
